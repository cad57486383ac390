//! Gas Event Tracker
//!
//! A small HTTP service that records and lists gas event submissions,
//! backed by a single flat JSON file on disk.
//!
//! # Features
//!
//! - **Flat-file persistence**: the full event sequence is rewritten to one
//!   JSON array on every append, via an atomic temp-file-then-rename write
//! - **Thread-safe**: single-writer/multi-reader discipline with an `RwLock`
//!   scoped to the store
//! - **Stable ids**: identifiers are `max + 1`, so uniqueness survives
//!   manual edits to the backing file
//!
//! # Modules
//!
//! - `types`: Record types (`GasEvent`, `EventDraft`)
//! - `store`: The event store (in-memory sequence + durable mirror)
//! - `api`: Axum HTTP layer (REST endpoints, static files, pages)
//! - `config`: Environment-variable configuration
//! - `utils`: Atomic file writes and timestamp helpers
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use gas_events::api::http::create_router;
//! use gas_events::store::EventStore;
//!
//! # async fn run() {
//! let store = Arc::new(EventStore::open("events.json").unwrap());
//! let app = create_router(store, std::path::Path::new("static"));
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:2001").await.unwrap();
//! axum::serve(listener, app).await.unwrap();
//! # }
//! ```

pub mod api;
pub mod config;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::Config;
pub use store::{EventStore, StoreError, StoreResult};
pub use types::{EventDraft, GasEvent};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
