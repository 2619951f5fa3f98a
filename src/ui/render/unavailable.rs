use super::Frame;
use crate::fixtures::UNAVAILABLE;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::Span,
    widgets::Paragraph,
};

pub fn unavailable(frame: &mut Frame, size: Rect, state: &State) {
    let widget = Paragraph::new(Span::styled(
        UNAVAILABLE,
        styling::muted_text_style(state.get_theme()),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(widget, size);
}
