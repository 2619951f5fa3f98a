//! Page registry module.
//!
//! This module contains the static description of every page, including:
//! - Page identifiers and their parsing
//! - Page descriptors (title and content handle)
//! - Transition profiles used when a page appears or leaves

mod id;
mod registry;
mod transition;

pub use id::{PageId, PageIdError};
pub use registry::{ContentRef, PageDescriptor, PageRegistry, FALLBACK_TITLE};
pub use transition::{Easing, Pose, Timing, TransitionProfile};
