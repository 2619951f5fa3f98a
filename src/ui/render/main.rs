use super::{articles, chat, home, myths, settings, unavailable, videos, Frame};
use crate::pages::{ContentRef, PageId};
use crate::state::State;
use crate::ui::widgets::motion;
use ratatui::layout::Rect;
use std::time::Instant;

/// Render the content area, placed and faded according to the animation.
///
pub fn main(frame: &mut Frame, size: Rect, state: &State, now: Instant) {
    let animation = state.animation_frame(now);
    let area = match motion::project(size, &animation.pose) {
        Some(area) => area,
        None => return,
    };

    let descriptor = state.controller().registry().page(animation.page);
    content(frame, area, state, descriptor.content);

    if let Some(style) = motion::fade(&animation.pose) {
        frame.buffer_mut().set_style(area, style);
    }
}

/// Resolve a content handle to the renderer that draws it.
///
fn content(frame: &mut Frame, size: Rect, state: &State, content: ContentRef) {
    match content {
        ContentRef::Page(PageId::Home) => home::home(frame, size, state),
        ContentRef::Page(PageId::Videos) => videos::videos(frame, size, state),
        ContentRef::Page(PageId::Articles) => articles::articles(frame, size, state),
        ContentRef::Page(PageId::Myths) => myths::myths(frame, size, state),
        ContentRef::Page(PageId::Settings) => settings::settings(frame, size, state),
        ContentRef::Page(PageId::Chat) => chat::chat(frame, size, state),
        ContentRef::Unavailable => unavailable::unavailable(frame, size, state),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw_content(content_ref: ContentRef) -> String {
        let state = still_state();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                content(frame, area, &state, content_ref)
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_every_page_renders_its_content() {
        assert!(draw_content(ContentRef::Page(PageId::Home)).contains("Hi, Sarah!"));
        assert!(draw_content(ContentRef::Page(PageId::Videos)).contains("Building Resilience"));
        assert!(draw_content(ContentRef::Page(PageId::Articles)).contains("5 min read"));
        assert!(draw_content(ContentRef::Page(PageId::Myths)).contains("Did you know?"));
        assert!(draw_content(ContentRef::Page(PageId::Settings)).contains("Account Settings"));
        assert!(draw_content(ContentRef::Page(PageId::Chat)).contains("Emily"));
    }

    #[test]
    fn test_unavailable_placeholder() {
        assert!(draw_content(ContentRef::Unavailable).contains("Page content not available."));
    }
}
