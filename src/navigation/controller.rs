use super::timer::OneShotTimer;
use crate::pages::{PageId, PageRegistry, TransitionProfile};
use log::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// How long the composer action stays active after its last trigger.
///
pub const COMPOSER_RESET_DELAY: Duration = Duration::from_millis(300);

/// The mutable navigation state. Only the controller writes it.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub current_page: PageId,
    pub previous_page: Option<PageId>,
    pub composer_action_active: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        NavigationState {
            current_page: PageId::Home,
            previous_page: None,
            composer_action_active: false,
        }
    }
}

/// Profiles to animate for the most recent page switch.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageTransition {
    pub outgoing: Option<PageId>,
    pub incoming: PageId,
    pub exit: Option<TransitionProfile>,
    pub entry: Option<TransitionProfile>,
}

/// Owns the navigation state and mediates every change to it.
///
/// Observers obtained through [`NavigationController::subscribe`] are
/// notified after each write. Invalid requests are logged and ignored.
pub struct NavigationController {
    registry: Arc<PageRegistry>,
    state: Arc<watch::Sender<NavigationState>>,
    activations: Arc<AtomicU64>,
    reset_timer: OneShotTimer,
}

impl NavigationController {
    /// Return a controller resting on the home page.
    ///
    pub fn new(registry: Arc<PageRegistry>) -> Self {
        Self::starting_at(registry, PageId::Home)
    }

    /// Return a controller resting on `page`.
    ///
    pub fn starting_at(registry: Arc<PageRegistry>, page: PageId) -> Self {
        let (state, _) = watch::channel(NavigationState {
            current_page: page,
            ..NavigationState::default()
        });
        NavigationController {
            registry,
            state: Arc::new(state),
            activations: Arc::new(AtomicU64::new(0)),
            reset_timer: OneShotTimer::new(),
        }
    }

    /// Return the registry pages are validated against.
    ///
    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    /// Return a copy of the current state.
    ///
    pub fn snapshot(&self) -> NavigationState {
        *self.state.borrow()
    }

    /// Return the page on screen.
    ///
    pub fn current_page(&self) -> PageId {
        self.state.borrow().current_page
    }

    /// Return the outgoing page of the last switch, if any.
    ///
    pub fn previous_page(&self) -> Option<PageId> {
        self.state.borrow().previous_page
    }

    /// Return true while the send button is drawn pressed.
    ///
    pub fn is_composer_action_active(&self) -> bool {
        self.state.borrow().composer_action_active
    }

    /// Subscribe to state changes.
    ///
    pub fn subscribe(&self) -> watch::Receiver<NavigationState> {
        self.state.subscribe()
    }

    /// Switch to the page named `id`. Unknown names leave the state as is.
    ///
    pub fn navigate_to(&self, id: &str) {
        match id.parse::<PageId>() {
            Ok(page) => self.navigate(page),
            Err(e) => warn!("Ignoring navigation request: {}", e),
        }
    }

    /// Switch to `page`, remembering the current page as the outgoing one.
    /// Navigating to the current page does nothing.
    ///
    pub fn navigate(&self, page: PageId) {
        let changed = self.state.send_if_modified(|state| {
            if state.current_page == page {
                return false;
            }
            state.previous_page = Some(state.current_page);
            state.current_page = page;
            true
        });
        if changed {
            debug!("Navigated to page '{}'", page);
        }
    }

    /// Mark the composer action active and (re)arm its reset.
    ///
    pub fn trigger_composer_action(&mut self) {
        let mut generation = 0;
        self.state.send_modify(|state| {
            generation = self.activations.fetch_add(1, Ordering::SeqCst) + 1;
            state.composer_action_active = true;
        });

        let state = Arc::clone(&self.state);
        let activations = Arc::clone(&self.activations);
        self.reset_timer.schedule(COMPOSER_RESET_DELAY, move || {
            state.send_if_modified(|state| {
                // A newer trigger owns the flag now
                if activations.load(Ordering::SeqCst) != generation {
                    return false;
                }
                let was_active = state.composer_action_active;
                state.composer_action_active = false;
                was_active
            });
        });
        info!("Message sent");
    }

    /// Return the exit and entry profiles for the most recent switch.
    ///
    pub fn transition(&self) -> PageTransition {
        let state = self.snapshot();
        PageTransition {
            outgoing: state.previous_page,
            incoming: state.current_page,
            exit: state
                .previous_page
                .and_then(|page| self.registry.transition_for(page.as_str()))
                .copied(),
            entry: self
                .registry
                .transition_for(state.current_page.as_str())
                .copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> NavigationController {
        NavigationController::new(Arc::new(PageRegistry::new()))
    }

    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[test]
    fn test_initial_state() {
        let controller = controller();
        assert_eq!(controller.current_page(), PageId::Home);
        assert_eq!(controller.previous_page(), None);
        assert!(!controller.is_composer_action_active());
    }

    #[test]
    fn test_starting_at() {
        let controller =
            NavigationController::starting_at(Arc::new(PageRegistry::new()), PageId::Myths);
        assert_eq!(controller.current_page(), PageId::Myths);
        assert_eq!(controller.previous_page(), None);
    }

    #[test]
    fn test_navigation_sequence() {
        let controller = controller();
        controller.navigate_to("videos");
        assert_eq!(controller.current_page(), PageId::Videos);
        controller.navigate_to("chat");
        assert_eq!(controller.current_page(), PageId::Chat);
        controller.navigate_to("unknown");
        assert_eq!(controller.current_page(), PageId::Chat);
        assert_eq!(controller.previous_page(), Some(PageId::Videos));
    }

    #[test]
    fn test_navigation_is_idempotent() {
        let controller = controller();
        controller.navigate(PageId::Articles);
        let once = controller.snapshot();
        controller.navigate(PageId::Articles);
        assert_eq!(controller.snapshot(), once);
        assert_eq!(controller.current_page(), PageId::Articles);
    }

    #[test]
    fn test_every_page_reachable_from_every_page() {
        let controller = controller();
        for from in PageId::ALL {
            for to in PageId::ALL {
                controller.navigate(from);
                controller.navigate(to);
                assert_eq!(controller.current_page(), to);
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigation_leaves_composer_flag_alone() {
        let mut controller = controller();
        controller.navigate(PageId::Chat);
        assert!(!controller.is_composer_action_active());

        controller.trigger_composer_action();
        controller.navigate(PageId::Home);
        assert!(controller.is_composer_action_active());

        tokio::time::sleep(Duration::from_millis(350)).await;
        settle().await;
        controller.navigate(PageId::Chat);
        assert!(!controller.is_composer_action_active());
        assert_eq!(controller.current_page(), PageId::Chat);
    }

    #[test]
    fn test_composer_flag_holds_without_runtime() {
        let mut controller = controller();
        controller.trigger_composer_action();
        assert!(controller.is_composer_action_active());

        std::thread::sleep(Duration::from_millis(100));
        assert!(controller.is_composer_action_active());

        std::thread::sleep(Duration::from_millis(500));
        assert!(!controller.is_composer_action_active());
    }

    #[test]
    fn test_observers_notified_on_navigation() {
        let controller = controller();
        let mut receiver = controller.subscribe();
        assert!(!receiver.has_changed().unwrap());

        controller.navigate(PageId::Home);
        assert!(!receiver.has_changed().unwrap());

        controller.navigate_to("nowhere");
        assert!(!receiver.has_changed().unwrap());

        controller.navigate(PageId::Settings);
        assert!(receiver.has_changed().unwrap());
        let state = *receiver.borrow_and_update();
        assert_eq!(state.current_page, PageId::Settings);
        assert_eq!(state.previous_page, Some(PageId::Home));
    }

    #[test]
    fn test_transition_pairing() {
        let controller = controller();
        let transition = controller.transition();
        assert_eq!(transition.outgoing, None);
        assert_eq!(transition.exit, None);
        assert_eq!(transition.incoming, PageId::Home);
        assert_eq!(
            transition.entry.as_ref(),
            Some(controller.registry().profile(PageId::Home))
        );

        controller.navigate(PageId::Myths);
        let transition = controller.transition();
        assert_eq!(transition.outgoing, Some(PageId::Home));
        assert_eq!(
            transition.exit.as_ref(),
            Some(controller.registry().profile(PageId::Home))
        );
        assert_eq!(transition.incoming, PageId::Myths);
        assert_eq!(
            transition.entry.as_ref(),
            Some(controller.registry().profile(PageId::Myths))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_trigger_clears_after_delay() {
        let mut controller = controller();
        controller.trigger_composer_action();
        assert!(controller.is_composer_action_active());

        tokio::time::sleep(Duration::from_millis(300)).await;
        settle().await;
        assert!(!controller.is_composer_action_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_retrigger_restarts_delay() {
        let mut controller = controller();
        controller.trigger_composer_action();
        tokio::time::sleep(Duration::from_millis(100)).await;
        controller.trigger_composer_action();

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert!(controller.is_composer_action_active());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!controller.is_composer_action_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_observers_notified_on_composer_reset() {
        let mut controller = controller();
        let mut receiver = controller.subscribe();

        controller.trigger_composer_action();
        assert!(receiver.has_changed().unwrap());
        assert!(receiver.borrow_and_update().composer_action_active);

        receiver.changed().await.unwrap();
        assert!(!receiver.borrow_and_update().composer_action_active);
    }

    #[tokio::test(start_paused = true)]
    async fn test_composer_flag_survives_navigation() {
        let mut controller = controller();
        controller.navigate(PageId::Chat);
        controller.trigger_composer_action();
        controller.navigate(PageId::Home);
        assert!(controller.is_composer_action_active());
        assert_eq!(controller.current_page(), PageId::Home);
    }
}
