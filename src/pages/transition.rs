//! Page transition profiles.
//!
//! A profile is three keyframes (entry, rest, exit) that the presentation
//! layer interpolates between, plus the timing shared by every page.

use std::time::Duration;

/// Overshoot used by the back-in half of the anticipate curve.
///
const ANTICIPATE_POWER: f32 = 1.525;

/// One animation keyframe.
///
/// Offsets are fractions of the viewport (`1.0` is a full width or height),
/// rotation is in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub rotate: f32,
    pub scale: f32,
}

impl Pose {
    /// The steady-state pose shared by every page.
    ///
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        rotate: 0.0,
        scale: 1.0,
    };

    /// A fully transparent pose that is otherwise at rest.
    ///
    const fn hidden() -> Pose {
        Pose {
            opacity: 0.0,
            ..Pose::REST
        }
    }

    /// Linearly interpolate towards `to`. `t` is not clamped so eased values
    /// that overshoot carry through.
    ///
    pub fn lerp(&self, to: &Pose, t: f32) -> Pose {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Pose {
            opacity: mix(self.opacity, to.opacity).clamp(0.0, 1.0),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            rotate: mix(self.rotate, to.rotate),
            scale: mix(self.scale, to.scale).max(0.0),
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::REST
    }
}

/// Easing curves understood by the animator.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Pulls back before moving, then settles exponentially.
    Anticipate,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress.
    ///
    pub fn apply(&self, progress: f32) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => p,
            Easing::Anticipate => {
                if p >= 1.0 {
                    return 1.0;
                }
                let doubled = p * 2.0;
                if doubled < 1.0 {
                    0.5 * back_in(doubled)
                } else {
                    0.5 * (2.0 - 2f32.powf(-10.0 * (doubled - 1.0)))
                }
            }
        }
    }
}

fn back_in(p: f32) -> f32 {
    p * p * ((ANTICIPATE_POWER + 1.0) * p - ANTICIPATE_POWER)
}

/// Timing applied to every page transition.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub easing: Easing,
    pub duration: Duration,
}

impl Timing {
    /// Tween with the anticipate curve over half a second.
    ///
    pub const DEFAULT: Timing = Timing {
        easing: Easing::Anticipate,
        duration: Duration::from_millis(500),
    };

    /// Eased progress after `elapsed` of this timing's duration.
    ///
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let linear = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.easing.apply(linear)
    }
}

impl Default for Timing {
    fn default() -> Self {
        Timing::DEFAULT
    }
}

/// Entry and exit animation parameters for one page.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionProfile {
    pub initial: Pose,
    pub rest: Pose,
    pub exit: Pose,
    pub timing: Timing,
}

impl TransitionProfile {
    const fn new(initial: Pose, exit: Pose) -> Self {
        TransitionProfile {
            initial,
            rest: Pose::REST,
            exit,
            timing: Timing::DEFAULT,
        }
    }

    /// Zoom in from slightly smaller, leave by growing.
    pub const fn zoom_in() -> Self {
        Self::new(
            Pose {
                scale: 0.8,
                ..Pose::hidden()
            },
            Pose {
                scale: 1.2,
                ..Pose::hidden()
            },
        )
    }

    /// Enter from the right, leave to the left.
    pub const fn slide_left() -> Self {
        Self::new(
            Pose {
                x: 1.0,
                ..Pose::hidden()
            },
            Pose {
                x: -1.0,
                ..Pose::hidden()
            },
        )
    }

    /// Enter from below, leave upwards.
    pub const fn slide_up() -> Self {
        Self::new(
            Pose {
                y: 1.0,
                ..Pose::hidden()
            },
            Pose {
                y: -1.0,
                ..Pose::hidden()
            },
        )
    }

    /// Enter from above, leave downwards.
    pub const fn slide_down() -> Self {
        Self::new(
            Pose {
                y: -1.0,
                ..Pose::hidden()
            },
            Pose {
                y: 1.0,
                ..Pose::hidden()
            },
        )
    }

    /// Swing in counter-clockwise, swing out clockwise.
    pub const fn spin() -> Self {
        Self::new(
            Pose {
                rotate: -90.0,
                ..Pose::hidden()
            },
            Pose {
                rotate: 90.0,
                ..Pose::hidden()
            },
        )
    }

    /// Shrink in from oversized, leave by shrinking further.
    pub const fn zoom_out() -> Self {
        Self::new(
            Pose {
                scale: 1.5,
                ..Pose::hidden()
            },
            Pose {
                scale: 0.5,
                ..Pose::hidden()
            },
        )
    }

    /// Pose while entering, `elapsed` after the entry started.
    ///
    pub fn entering(&self, elapsed: Duration) -> Pose {
        self.initial.lerp(&self.rest, self.timing.progress(elapsed))
    }

    /// Pose while leaving, `elapsed` after the exit started.
    ///
    pub fn exiting(&self, elapsed: Duration) -> Pose {
        self.rest.lerp(&self.exit, self.timing.progress(elapsed))
    }
}
