//! Utility functions and helpers
//!
//! This module contains atomic file writes and timestamp helpers.

pub mod atomic;
pub mod time;

pub use time::rfc3339_now;
