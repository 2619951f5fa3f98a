use super::animator::{AnimationFrame, TransitionAnimator};
use super::navigation::{move_tile, Focus, TileDirection};
use crate::config::{Config, Hotkeys};
use crate::fixtures::{Tile, HOME_TILES, TABS};
use crate::logger::LogBuffer;
use crate::navigation::NavigationController;
use crate::pages::{PageDescriptor, PageId, PageRegistry};
use crate::ui::Theme;
use log::*;
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::Instant;

/// Houses data representative of application state.
///
pub struct State {
    controller: NavigationController,
    animator: TransitionAnimator,
    hotkeys: Hotkeys,
    theme: Theme,
    user_name: String,
    terminal_size: Rect,
    current_focus: Focus,
    tile_index: usize,
    composer_draft: String,
    log: LogBuffer,
    log_visible: bool,
}

impl State {
    /// Build the state for a session described by `config`.
    ///
    pub fn new(config: &Config, log: LogBuffer, now: Instant) -> Self {
        let registry = Arc::new(PageRegistry::new());
        let controller =
            NavigationController::starting_at(registry, config.resolve_start_page());
        let animator = TransitionAnimator::new(&controller, config.animations, now);
        State {
            controller,
            animator,
            hotkeys: config.hotkeys.clone(),
            theme: Theme::resolve(&config.theme_name),
            user_name: config.user_name.clone(),
            terminal_size: Rect::default(),
            current_focus: Focus::Page,
            tile_index: 0,
            composer_draft: String::new(),
            log,
            log_visible: false,
        }
    }

    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn get_hotkeys(&self) -> &Hotkeys {
        &self.hotkeys
    }

    pub fn get_user_name(&self) -> &str {
        &self.user_name
    }

    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    pub fn get_terminal_size(&self) -> Rect {
        self.terminal_size
    }

    pub fn current_page(&self) -> PageId {
        self.controller.current_page()
    }

    /// Return the descriptor of the page currently navigated to.
    ///
    pub fn current_descriptor(&self) -> &PageDescriptor {
        self.controller.registry().page(self.current_page())
    }

    /// Switch pages, leaving the composer if it was focused.
    ///
    pub fn navigate(&mut self, page: PageId) -> &mut Self {
        if self.current_focus == Focus::Composer && page != PageId::Chat {
            self.current_focus = Focus::Page;
        }
        self.controller.navigate(page);
        self
    }

    /// Position of the current page in the tab bar, if it has a tab.
    ///
    pub fn current_tab_index(&self) -> Option<usize> {
        let page = self.current_page();
        TABS.iter().position(|tab| tab.page == page)
    }

    pub fn next_tab(&mut self) -> &mut Self {
        let next = match self.current_tab_index() {
            Some(i) => (i + 1) % TABS.len(),
            None => 0,
        };
        self.navigate(TABS[next].page)
    }

    pub fn previous_tab(&mut self) -> &mut Self {
        let previous = match self.current_tab_index() {
            Some(0) | None => TABS.len() - 1,
            Some(i) => i - 1,
        };
        self.navigate(TABS[previous].page)
    }

    pub fn current_tile_index(&self) -> usize {
        self.tile_index
    }

    pub fn current_tile(&self) -> &Tile {
        &HOME_TILES[self.tile_index]
    }

    pub fn move_tile_selection(&mut self, direction: TileDirection) -> &mut Self {
        self.tile_index = move_tile(self.tile_index, direction);
        self
    }

    /// Navigate to the page behind the selected home tile.
    ///
    pub fn open_current_tile(&mut self) -> &mut Self {
        let page = self.current_tile().page;
        debug!("Opening home tile '{}'", self.current_tile().label);
        self.navigate(page)
    }

    pub fn current_focus(&self) -> Focus {
        self.current_focus
    }

    pub fn is_composing(&self) -> bool {
        self.current_focus == Focus::Composer
    }

    /// Focus the chat composer. Only possible on the chat page.
    ///
    pub fn focus_composer(&mut self) -> &mut Self {
        if self.current_page() == PageId::Chat {
            self.current_focus = Focus::Composer;
        }
        self
    }

    pub fn leave_composer(&mut self) -> &mut Self {
        self.current_focus = Focus::Page;
        self
    }

    pub fn get_composer_draft(&self) -> &str {
        &self.composer_draft
    }

    pub fn add_composer_char(&mut self, c: char) -> &mut Self {
        self.composer_draft.push(c);
        self
    }

    pub fn remove_composer_char(&mut self) -> &mut Self {
        self.composer_draft.pop();
        self
    }

    /// Press the send button. Nothing is transmitted and the draft is kept.
    ///
    pub fn send_message(&mut self) -> &mut Self {
        if self.current_page() == PageId::Chat {
            self.controller.trigger_composer_action();
        }
        self
    }

    pub fn is_send_pressed(&self) -> bool {
        self.controller.is_composer_action_active()
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.log_visible = !self.log_visible;
        self
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    pub fn get_log_entries(&self, count: usize) -> Vec<String> {
        self.log.tail(count)
    }

    /// Let the animator observe changes made since the last tick.
    ///
    pub fn tick(&mut self, now: Instant) -> &mut Self {
        self.animator.sync(&self.controller, now);
        self
    }

    pub fn animation_frame(&self, now: Instant) -> AnimationFrame {
        self.animator.frame(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.animator.is_animating(now)
    }
}
