mod articles;
mod chat;
mod footer;
mod header;
mod home;
mod log;
mod main;
mod myths;
mod settings;
mod tab_bar;
mod unavailable;
mod videos;

use self::log::log;
use super::*;
use crate::state::State;
use footer::footer;
use header::header;
use main::main;
use ratatui::layout::{Constraint, Direction, Layout};
use std::time::Instant;
use tab_bar::tab_bar;

/// Render the whole screen according to state at `now`.
///
pub fn render(frame: &mut Frame, state: &State, now: Instant) {
    let mut constraints = vec![Constraint::Length(3), Constraint::Min(6)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(8));
    }
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Length(1));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    header(frame, rows[0], state);
    main(frame, rows[1], state, now);
    let mut next = 2;
    if state.is_log_visible() {
        log(frame, rows[next], state);
        next += 1;
    }
    tab_bar(frame, rows[next], state);
    footer(frame, rows[next + 1], state);
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::pages::PageId;
    use std::time::Duration;

    #[test]
    fn test_renders_header_and_tabs() {
        let state = still_state();
        let screen = draw(&state, Instant::now());
        assert!(screen.contains("Mental Health Resources"));
        assert!(screen.contains("Home"));
        assert!(screen.contains("Settings"));
    }

    #[test]
    fn test_header_follows_navigation() {
        let mut state = still_state();
        state.navigate(PageId::Chat).tick(Instant::now());
        let screen = draw(&state, Instant::now());
        assert!(screen.contains("Group Chat"));
    }

    #[test]
    fn test_log_pane_toggle() {
        let mut state = still_state();
        assert!(!draw(&state, Instant::now()).contains("Log"));
        state.toggle_log();
        assert!(draw(&state, Instant::now()).contains("Log"));
    }

    #[test]
    fn test_exit_phase_shows_outgoing_page() {
        let start = Instant::now();
        let mut state = State::new(
            &crate::config::Config::new(),
            crate::logger::LogBuffer::new(),
            start,
        );
        let switched = start + Duration::from_secs(2);
        state.navigate(PageId::Settings).tick(switched);

        let screen = draw(&state, switched);
        assert!(screen.contains("Hi, Sarah!"));
        assert!(screen.contains("Settings"));

        let screen = draw(&state, switched + Duration::from_secs(2));
        assert!(screen.contains("Privacy Settings"));
        assert!(!screen.contains("Hi, Sarah!"));
    }
}
