use super::Frame;
use crate::fixtures::TABS;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const DIVIDER: &str = "   ";

/// Render the bottom tab bar, highlighting the current page's tab.
///
pub fn tab_bar(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let current = state.current_tab_index();

    let mut spans = Vec::with_capacity(TABS.len() * 2);
    for (i, tab) in TABS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(DIVIDER));
        }
        let style = if current == Some(i) {
            styling::active_tab_style(theme)
        } else {
            styling::muted_text_style(theme)
        };
        spans.push(Span::styled(format!("{} {}", tab.glyph, tab.label), style));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(styling::normal_block_border_style(theme));
    let widget = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(widget, size);
}
