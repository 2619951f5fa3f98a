use super::Frame;
use crate::fixtures::SETTINGS;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render one card per settings group.
///
pub fn settings(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let mut constraints: Vec<_> = SETTINGS.iter().map(|_| Constraint::Length(4)).collect();
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    for (i, setting) in SETTINGS.iter().enumerate() {
        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{} ", setting.glyph), styling::active_tab_style(theme)),
                Span::styled(setting.title, styling::heading_style(theme)),
            ]),
            Line::from(Span::styled(
                format!("  {}", setting.description),
                styling::muted_text_style(theme),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).block(styling::card(theme)), rows[i]);
    }
}
