use super::Frame;
use crate::fixtures::{FEATURED_VIDEO, VIDEOS};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// Render the featured video and the list of video cards.
///
pub fn videos(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let mut constraints = vec![Constraint::Length(5)];
    constraints.extend(VIDEOS.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    let featured = Paragraph::new(vec![
        Line::from(Span::styled("▶", styling::active_tab_style(theme))),
        Line::from(Span::styled(FEATURED_VIDEO, styling::normal_text_style(theme))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(styling::titled_card(" Featured ", theme));
    frame.render_widget(featured, rows[0]);

    for (i, title) in VIDEOS.iter().enumerate() {
        let line = Line::from(vec![
            Span::styled("▶ ", styling::muted_text_style(theme)),
            Span::styled(*title, styling::normal_text_style(theme)),
        ]);
        frame.render_widget(
            Paragraph::new(line).block(styling::card(theme)),
            rows[i + 1],
        );
    }
}
