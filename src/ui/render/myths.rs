use super::Frame;
use crate::fixtures::{DID_YOU_KNOW, MYTH};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// Render the myth card and the "did you know" card.
///
pub fn myths(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(size);

    let myth = Paragraph::new(vec![
        Line::from(Span::styled(MYTH.myth, styling::normal_text_style(theme))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Fact: ", styling::heading_style(theme)),
            Span::styled(MYTH.fact, styling::normal_text_style(theme)),
        ]),
    ])
    .wrap(Wrap { trim: true })
    .block(styling::titled_card(" Common Myth ", theme));
    frame.render_widget(myth, rows[0]);

    let fact = Paragraph::new(Span::styled(
        DID_YOU_KNOW,
        styling::normal_text_style(theme),
    ))
    .wrap(Wrap { trim: true })
    .block(
        styling::titled_card(" Did you know? ", theme)
            .border_style(styling::active_block_border_style(theme)),
    );
    frame.render_widget(fact, rows[1]);
}
