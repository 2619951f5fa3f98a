//! Application state management module.
//!
//! This module contains the UI state wrapped around the navigation
//! controller, including:
//! - Main `State` struct that holds all session data
//! - Focus and home tile grid movement
//! - The transition animator that observes page switches

mod animator;
mod navigation;
mod state_impl;

pub use animator::{AnimationFrame, Phase, TransitionAnimator};
pub use navigation::{move_tile, Focus, TileDirection};
pub use state_impl::State;
