//! Terminal rendition of a mental health resources app.
//!
//! Pages are switched through a [`navigation::NavigationController`] that
//! owns the current and previous page, pairs every switch with the page
//! transition profiles from [`pages::PageRegistry`], and runs the chat
//! composer's momentary send state.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod fixtures;
pub mod logger;
pub mod navigation;
pub mod pages;
pub mod state;
pub mod ui;
