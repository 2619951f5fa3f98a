use crate::config::hotkeys::{HotkeyAction, HotkeyContext};
use crate::pages::PageId;
use crate::state::{State, TileDirection};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds. Also paces animation frames.
///
const TICK_RATE_IN_MS: u64 = 33;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => (),
                        Err(err) => {
                            error!("Failed to read terminal event: {}", err);
                            break;
                        }
                    },
                    Ok(false) => (),
                    Err(err) => {
                        error!("Failed to poll terminal events: {}", err);
                        break;
                    }
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => Ok(handle_key(event, state)),
            Event::Tick => Ok(true),
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a key event to state. Returns false if exit was requested.
///
pub fn handle_key(event: KeyEvent, state: &mut State) -> bool {
    if event.kind != KeyEventKind::Press {
        return true;
    }
    if event.code == KeyCode::Char('c') && event.modifiers == KeyModifiers::CONTROL {
        debug!("Processing exit terminal event '{:?}'...", event);
        return false;
    }

    if state.is_composing() {
        handle_composer_key(event, state);
        return true;
    }

    let page_context = match state.current_page() {
        PageId::Home => Some(HotkeyContext::Home),
        PageId::Chat => Some(HotkeyContext::Chat),
        _ => None,
    };
    let action = page_context
        .and_then(|context| state.get_hotkeys().action_for(&event, context))
        .or_else(|| state.get_hotkeys().action_for(&event, HotkeyContext::Global));

    match action {
        Some(action) => apply(action, state),
        None => true,
    }
}

fn handle_composer_key(event: KeyEvent, state: &mut State) {
    if let Some(action) = state
        .get_hotkeys()
        .action_for(&event, HotkeyContext::Composer)
    {
        apply(action, state);
        return;
    }
    match event.code {
        KeyCode::Backspace => {
            state.remove_composer_char();
        }
        KeyCode::Char(c)
            if event.modifiers == KeyModifiers::NONE || event.modifiers == KeyModifiers::SHIFT =>
        {
            state.add_composer_char(c);
        }
        _ => (),
    }
}

fn apply(action: HotkeyAction, state: &mut State) -> bool {
    debug!("Processing hotkey action {:?}...", action);
    match action {
        HotkeyAction::Quit => return false,
        HotkeyAction::NextTab => {
            state.next_tab();
        }
        HotkeyAction::PreviousTab => {
            state.previous_tab();
        }
        HotkeyAction::GoHome => {
            state.navigate(PageId::Home);
        }
        HotkeyAction::GoVideos => {
            state.navigate(PageId::Videos);
        }
        HotkeyAction::GoArticles => {
            state.navigate(PageId::Articles);
        }
        HotkeyAction::GoChat => {
            state.navigate(PageId::Chat);
        }
        HotkeyAction::GoSettings => {
            state.navigate(PageId::Settings);
        }
        HotkeyAction::GoMyths => {
            state.navigate(PageId::Myths);
        }
        HotkeyAction::ToggleLog => {
            state.toggle_log();
        }
        HotkeyAction::TileUp => {
            state.move_tile_selection(TileDirection::Up);
        }
        HotkeyAction::TileDown => {
            state.move_tile_selection(TileDirection::Down);
        }
        HotkeyAction::TileLeft => {
            state.move_tile_selection(TileDirection::Left);
        }
        HotkeyAction::TileRight => {
            state.move_tile_selection(TileDirection::Right);
        }
        HotkeyAction::OpenTile => {
            state.open_current_tile();
        }
        HotkeyAction::FocusComposer => {
            state.focus_composer();
        }
        HotkeyAction::SendMessage => {
            state.send_message();
        }
        HotkeyAction::LeaveComposer => {
            state.leave_composer();
        }
    }
    true
}
