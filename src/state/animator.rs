//! Page transition animation.
//!
//! Plays the outgoing page's exit to completion, then the incoming page's
//! entry, then rests. A new page switch restarts from its own pairing.

use crate::navigation::{NavigationController, NavigationState, PageTransition};
use crate::pages::{PageId, Pose};
use std::time::{Duration, Instant};
use tokio::sync::watch;

/// Which half of a transition is on screen.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Phase {
    Exiting,
    Entering,
    Resting,
}

/// What to draw right now.
///
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct AnimationFrame {
    pub page: PageId,
    pub pose: Pose,
    pub phase: Phase,
}

/// Tracks the active transition by observing the navigation controller.
///
pub struct TransitionAnimator {
    enabled: bool,
    receiver: watch::Receiver<NavigationState>,
    transition: PageTransition,
    started: Instant,
}

impl TransitionAnimator {
    /// Start animating the controller's current page into view.
    ///
    pub fn new(controller: &NavigationController, enabled: bool, now: Instant) -> Self {
        TransitionAnimator {
            enabled,
            receiver: controller.subscribe(),
            transition: controller.transition(),
            started: now,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Pick up a page switch if one happened since the last sync.
    ///
    pub fn sync(&mut self, controller: &NavigationController, now: Instant) {
        if !self.receiver.has_changed().unwrap_or(false) {
            return;
        }
        let state = *self.receiver.borrow_and_update();
        if state.current_page != self.transition.incoming {
            self.transition = controller.transition();
            self.started = now;
        }
    }

    /// Total time from the switch until the incoming page rests.
    ///
    fn total_duration(&self) -> Duration {
        let exit = match (self.transition.outgoing, &self.transition.exit) {
            (Some(_), Some(profile)) => profile.timing.duration,
            _ => Duration::ZERO,
        };
        let entry = self
            .transition
            .entry
            .map(|profile| profile.timing.duration)
            .unwrap_or_default();
        exit + entry
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.enabled && now.saturating_duration_since(self.started) < self.total_duration()
    }

    /// Return the page and pose to draw at `now`.
    ///
    pub fn frame(&self, now: Instant) -> AnimationFrame {
        let resting = AnimationFrame {
            page: self.transition.incoming,
            pose: Pose::REST,
            phase: Phase::Resting,
        };
        if !self.enabled {
            return resting;
        }

        let mut elapsed = now.saturating_duration_since(self.started);
        if let (Some(outgoing), Some(exit)) = (self.transition.outgoing, &self.transition.exit) {
            if elapsed < exit.timing.duration {
                return AnimationFrame {
                    page: outgoing,
                    pose: exit.exiting(elapsed),
                    phase: Phase::Exiting,
                };
            }
            elapsed -= exit.timing.duration;
        }

        match &self.transition.entry {
            Some(entry) if elapsed < entry.timing.duration => AnimationFrame {
                page: self.transition.incoming,
                pose: entry.entering(elapsed),
                phase: Phase::Entering,
            },
            _ => resting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::PageRegistry;
    use std::sync::Arc;

    fn controller() -> NavigationController {
        NavigationController::new(Arc::new(PageRegistry::new()))
    }

    #[test]
    fn test_first_page_enters() {
        let controller = controller();
        let start = Instant::now();
        let animator = TransitionAnimator::new(&controller, true, start);

        let frame = animator.frame(start);
        assert_eq!(frame.page, PageId::Home);
        assert_eq!(frame.phase, Phase::Entering);
        assert_eq!(frame.pose, controller.registry().profile(PageId::Home).initial);

        let frame = animator.frame(start + Duration::from_millis(500));
        assert_eq!(frame.phase, Phase::Resting);
        assert_eq!(frame.pose, Pose::REST);
    }

    #[test]
    fn test_exit_then_entry_then_rest() {
        let controller = controller();
        let start = Instant::now();
        let mut animator = TransitionAnimator::new(&controller, true, start);

        let switched = start + Duration::from_secs(5);
        controller.navigate(PageId::Videos);
        animator.sync(&controller, switched);

        let frame = animator.frame(switched + Duration::from_millis(100));
        assert_eq!(frame.page, PageId::Home);
        assert_eq!(frame.phase, Phase::Exiting);

        let frame = animator.frame(switched + Duration::from_millis(600));
        assert_eq!(frame.page, PageId::Videos);
        assert_eq!(frame.phase, Phase::Entering);
        assert!(animator.is_animating(switched + Duration::from_millis(600)));

        let frame = animator.frame(switched + Duration::from_millis(1000));
        assert_eq!(frame.page, PageId::Videos);
        assert_eq!(frame.phase, Phase::Resting);
        assert!(!animator.is_animating(switched + Duration::from_millis(1000)));
    }

    #[test]
    fn test_renavigation_restarts() {
        let controller = controller();
        let start = Instant::now();
        let mut animator = TransitionAnimator::new(&controller, true, start);

        controller.navigate(PageId::Chat);
        animator.sync(&controller, start);
        let later = start + Duration::from_millis(700);
        controller.navigate(PageId::Settings);
        animator.sync(&controller, later);

        let frame = animator.frame(later);
        assert_eq!(frame.page, PageId::Chat);
        assert_eq!(frame.phase, Phase::Exiting);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unrelated_changes_do_not_restart() {
        let mut controller = controller();
        let start = Instant::now();
        let mut animator = TransitionAnimator::new(&controller, true, start);

        controller.trigger_composer_action();
        assert!(controller.is_composer_action_active());
        animator.sync(&controller, start + Duration::from_secs(1));
        assert_eq!(
            animator.frame(start + Duration::from_secs(1)).phase,
            Phase::Resting
        );
    }

    #[test]
    fn test_disabled_always_rests() {
        let controller = controller();
        let start = Instant::now();
        let mut animator = TransitionAnimator::new(&controller, false, start);
        controller.navigate(PageId::Myths);
        animator.sync(&controller, start);

        let frame = animator.frame(start);
        assert_eq!(frame.page, PageId::Myths);
        assert_eq!(frame.phase, Phase::Resting);
        assert!(!animator.is_animating(start));
    }
}
