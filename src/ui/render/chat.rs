use super::Frame;
use crate::fixtures::{CHAT_TRANSCRIPT, COMPOSER_PLACEHOLDER};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

const SEND_BUTTON_WIDTH: u16 = 10;

/// Render the group chat transcript and the message composer.
///
pub fn chat(frame: &mut Frame, size: Rect, state: &State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(size);

    transcript(frame, rows[0], state);
    composer(frame, rows[1], state);
}

fn transcript(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let mut lines = Vec::with_capacity(CHAT_TRANSCRIPT.len() * 3);
    for message in CHAT_TRANSCRIPT.iter() {
        let name_style = if message.name == state.get_user_name() {
            styling::active_tab_style(theme)
        } else {
            styling::heading_style(theme)
        };
        lines.push(Line::from(vec![
            Span::styled(message.name, name_style),
            Span::styled(format!("  {}", message.time), styling::muted_text_style(theme)),
        ]));
        lines.push(Line::from(Span::styled(
            message.message,
            styling::normal_text_style(theme),
        )));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(styling::card(theme));
    frame.render_widget(widget, size);
}

fn composer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(SEND_BUTTON_WIDTH)])
        .split(size);

    let draft = state.get_composer_draft();
    let input = if draft.is_empty() && !state.is_composing() {
        Span::styled(COMPOSER_PLACEHOLDER, styling::muted_text_style(theme))
    } else if state.is_composing() {
        Span::styled(format!("{}▏", draft), styling::normal_text_style(theme))
    } else {
        Span::styled(draft, styling::normal_text_style(theme))
    };
    let input_block = if state.is_composing() {
        styling::card(theme).border_style(styling::active_block_border_style(theme))
    } else {
        styling::card(theme)
    };
    frame.render_widget(Paragraph::new(input).block(input_block), columns[0]);

    let button_color = if state.is_send_pressed() {
        theme.send_pressed.to_color()
    } else {
        theme.send.to_color()
    };
    let button = Paragraph::new(Span::styled(
        "Send",
        Style::default().fg(button_color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(styling::card(theme).border_style(Style::default().fg(button_color)));
    frame.render_widget(button, columns[1]);
}
