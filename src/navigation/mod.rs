//! Navigation state machine.
//!
//! The controller owns which page is showing and the transient composer
//! action flag. The flag is cleared by a cancellable one-shot timer.

mod controller;
mod timer;

pub use controller::{
    NavigationController, NavigationState, PageTransition, COMPOSER_RESET_DELAY,
};
pub use timer::OneShotTimer;
