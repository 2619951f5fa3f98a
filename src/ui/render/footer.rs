use super::Frame;
use crate::config::hotkeys::{build_footer_text, HotkeyAction, HotkeyContext};
use crate::pages::PageId;
use crate::state::State;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const GLOBAL_HINTS: [(HotkeyAction, HotkeyContext, &str); 3] = [
    (HotkeyAction::NextTab, HotkeyContext::Global, "next tab"),
    (HotkeyAction::ToggleLog, HotkeyContext::Global, "log"),
    (HotkeyAction::Quit, HotkeyContext::Global, "quit"),
];

/// Return the mode label and hint text for the current input context.
///
fn hints(state: &State) -> (&'static str, String) {
    let hotkeys = state.get_hotkeys();
    if state.is_composing() {
        let text = build_footer_text(
            hotkeys,
            &[
                (HotkeyAction::SendMessage, HotkeyContext::Composer, "send"),
                (HotkeyAction::LeaveComposer, HotkeyContext::Composer, "done"),
            ],
        );
        return ("COMPOSE:", format!(" Type a message,{}", text));
    }

    let (label, page_hints) = match state.current_page() {
        PageId::Home => (
            "HOME:",
            vec![(HotkeyAction::OpenTile, HotkeyContext::Home, "open")],
        ),
        PageId::Chat => (
            "CHAT:",
            vec![
                (HotkeyAction::FocusComposer, HotkeyContext::Chat, "write"),
                (HotkeyAction::SendMessage, HotkeyContext::Chat, "send"),
            ],
        ),
        _ => ("NORMAL:", Vec::new()),
    };

    let mut parts = Vec::new();
    if state.current_page() == PageId::Home {
        parts.push(" ←↑↓→: select".to_string());
    }
    let page_text = build_footer_text(hotkeys, &page_hints);
    if !page_text.is_empty() {
        parts.push(page_text);
    }
    parts.push(build_footer_text(hotkeys, &GLOBAL_HINTS));
    (label, parts.join(","))
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (label, text) = hints(state);

    let controls = Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(theme.surface.to_color())
                .bg(theme.primary.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(text, Style::default().fg(theme.accent.to_color())),
    ]);
    let controls_widget = Paragraph::new(controls).alignment(Alignment::Left);

    let version = Line::from(Span::styled(
        format!(" {}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(theme.text_muted.to_color()),
    ));
    let version_width = version.width();
    let version_widget = Paragraph::new(version).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(version_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(version_widget, columns[1]);
}

#[cfg(test)]
mod tests {
    use super::super::test_support::still_state;
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_home_hints() {
        let state = still_state();
        let (label, text) = hints(&state);
        assert_eq!(label, "HOME:");
        assert!(text.contains("Enter: open"));
        assert!(text.contains("q: quit"));
    }

    #[test]
    fn test_composer_hints() {
        let mut state = still_state();
        state.navigate(PageId::Chat).tick(Instant::now());
        state.focus_composer();
        let (label, text) = hints(&state);
        assert_eq!(label, "COMPOSE:");
        assert!(text.contains("Esc: done"));
        assert!(!text.contains("quit"));
    }
}
