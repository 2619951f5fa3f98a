//! Event handling module.
//!
//! Terminal events: keyboard input and the render tick.

pub mod terminal;
