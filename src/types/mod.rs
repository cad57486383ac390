//! Data types for the gas event tracker
//!
//! This module contains the record types shared between the store and the
//! HTTP layer.

mod gas_event;

pub use gas_event::{EventDraft, GasEvent};
