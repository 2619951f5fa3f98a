use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the page title bar.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styling::normal_block_border_style(theme));

    let title = Line::from(Span::styled(
        format!(" {}", state.current_descriptor().title),
        styling::heading_style(theme),
    ));
    frame.render_widget(Paragraph::new(title).block(block), size);
}
