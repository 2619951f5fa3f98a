//! Maps animation poses onto terminal cells.
//!
//! Terminals cannot rotate or blend, so rotation becomes a horizontal
//! squeeze and low opacity becomes dimmed text or nothing at all.

use crate::pages::Pose;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

/// Below this opacity nothing is drawn.
///
const INVISIBLE_BELOW: f32 = 0.1;

/// Below this opacity the page is drawn dimmed.
///
const DIM_BELOW: f32 = 0.6;

/// Return the part of `area` a page in `pose` covers, or `None` if it is
/// invisible or entirely outside `area`.
///
pub fn project(area: Rect, pose: &Pose) -> Option<Rect> {
    if pose.opacity < INVISIBLE_BELOW || area.area() == 0 {
        return None;
    }

    let squeeze = pose.rotate.to_radians().cos().abs();
    let width = (area.width as f32 * pose.scale * squeeze).round() as i32;
    let height = (area.height as f32 * pose.scale).round() as i32;

    let center_x = area.x as i32
        + area.width as i32 / 2
        + (pose.x * area.width as f32).round() as i32;
    let center_y = area.y as i32
        + area.height as i32 / 2
        + (pose.y * area.height as f32).round() as i32;

    let left = (center_x - width / 2).max(area.left() as i32);
    let top = (center_y - height / 2).max(area.top() as i32);
    let right = (center_x - width / 2 + width).min(area.right() as i32);
    let bottom = (center_y - height / 2 + height).min(area.bottom() as i32);

    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

/// Return the style overlay for the pose's opacity, if any.
///
pub fn fade(pose: &Pose) -> Option<Style> {
    if pose.opacity < DIM_BELOW {
        Some(Style::default().add_modifier(Modifier::DIM))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 0,
        y: 2,
        width: 40,
        height: 20,
    };

    #[test]
    fn test_rest_covers_area() {
        assert_eq!(project(AREA, &Pose::REST), Some(AREA));
        assert_eq!(fade(&Pose::REST), None);
    }

    #[test]
    fn test_invisible_pose() {
        let pose = Pose {
            opacity: 0.0,
            ..Pose::REST
        };
        assert_eq!(project(AREA, &pose), None);
    }

    #[test]
    fn test_half_slide_right() {
        let pose = Pose {
            x: 0.5,
            ..Pose::REST
        };
        assert_eq!(project(AREA, &pose), Some(Rect::new(20, 2, 20, 20)));
    }

    #[test]
    fn test_full_slide_is_offscreen() {
        let pose = Pose {
            y: -1.0,
            ..Pose::REST
        };
        assert_eq!(project(AREA, &pose), None);
    }

    #[test]
    fn test_scale_down_is_centered() {
        let pose = Pose {
            scale: 0.5,
            ..Pose::REST
        };
        assert_eq!(project(AREA, &pose), Some(Rect::new(10, 7, 20, 10)));
    }

    #[test]
    fn test_scale_up_is_clipped() {
        let pose = Pose {
            scale: 1.5,
            ..Pose::REST
        };
        assert_eq!(project(AREA, &pose), Some(AREA));
    }

    #[test]
    fn test_rotation_squeezes_width() {
        let pose = Pose {
            rotate: 60.0,
            ..Pose::REST
        };
        assert_eq!(project(AREA, &pose), Some(Rect::new(10, 2, 20, 20)));
    }

    #[test]
    fn test_faded_pose_is_dimmed() {
        let pose = Pose {
            opacity: 0.3,
            ..Pose::REST
        };
        assert!(fade(&pose).is_some());
    }
}
