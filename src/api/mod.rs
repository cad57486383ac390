//! API module for the HTTP endpoints
//!
//! This module provides the REST API, static file serving, and the HTML
//! pages of the gas event tracker.

pub mod http;
pub mod rest;
