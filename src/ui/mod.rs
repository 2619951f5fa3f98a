//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Screen layout (header, page area, tab bar, footer)
//! - Theme management
//! - Page transition projection onto terminal cells
//! - Page rendering (home, videos, articles, myths, settings, chat)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
pub mod theme;
mod widgets;

pub use render::render;
pub use theme::Theme;
