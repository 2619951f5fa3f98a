//! Reusable UI widget helpers.
//!
//! This module contains shared styling and the mapping of animation poses to screen areas.

pub mod motion;
pub mod styling;
