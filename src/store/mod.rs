//! Event store - the file-backed sequence of gas events
//!
//! The store owns the authoritative in-memory list of records and mirrors it
//! to a single JSON file after every append. Reads are served from memory.
//!
//! Locking discipline: one `RwLock` per store guards both the sequence and
//! the file write. An append holds the write lock for the full
//! mutate-then-persist span, so readers see either the state before or after
//! an append, never an intermediate one.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::types::{EventDraft, GasEvent};
use crate::utils::atomic::{atomic_write, remove_stale_temp};
use crate::utils::time::rfc3339_now;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in EventStore operations
#[derive(Debug)]
pub enum StoreError {
    /// The backing file could not be created at startup.
    Create(io::Error),
    /// The backing file could not be read at startup.
    Read(io::Error),
    /// The backing file contents are not a JSON array of events.
    Decode(serde_json::Error),
    /// The in-memory sequence could not be serialized.
    Encode(serde_json::Error),
    /// The full-file rewrite failed after the in-memory append.
    Write(io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Create(e) => write!(f, "error creating file: {}", e),
            StoreError::Read(e) => write!(f, "error reading file: {}", e),
            StoreError::Decode(e) => write!(f, "error decoding data: {}", e),
            StoreError::Encode(e) => write!(f, "error encoding data: {}", e),
            StoreError::Write(e) => write!(f, "error writing file: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Create(e) | StoreError::Read(e) | StoreError::Write(e) => Some(e),
            StoreError::Decode(e) | StoreError::Encode(e) => Some(e),
        }
    }
}

impl StoreError {
    /// Startup failure: the store was never produced.
    pub fn is_initialization(&self) -> bool {
        matches!(
            self,
            StoreError::Create(_) | StoreError::Read(_) | StoreError::Decode(_)
        )
    }

    /// Append-time failure: the in-memory sequence was already mutated and
    /// now diverges from disk until the next successful write.
    pub fn is_persistence(&self) -> bool {
        matches!(self, StoreError::Encode(_) | StoreError::Write(_))
    }
}

/// The EventStore keeps the ordered event sequence in memory and mirrors it
/// to disk on every append.
#[derive(Debug)]
pub struct EventStore {
    path: PathBuf,
    events: RwLock<Vec<GasEvent>>,
}

impl EventStore {
    /// Open a store backed by the given file, creating it if absent.
    ///
    /// A non-empty file that does not decode as a JSON array of events is
    /// fatal; there is no skip-bad-records recovery.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(StoreError::Create)?;
        }

        // A leftover .tmp from an interrupted write is dead weight
        let _ = remove_stale_temp(&path);

        if !path.exists() {
            fs::write(&path, b"[]").map_err(StoreError::Create)?;
        }

        let data = fs::read_to_string(&path).map_err(StoreError::Read)?;
        let events: Vec<GasEvent> = if data.trim().is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(&data).map_err(StoreError::Decode)?
        };

        tracing::info!(count = events.len(), path = %path.display(), "loaded events");

        Ok(Self {
            path,
            events: RwLock::new(events),
        })
    }

    /// Return a copy of the full sequence, in insertion order.
    pub fn list(&self) -> Vec<GasEvent> {
        self.events.read().clone()
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Get the backing file path
    pub fn file_path(&self) -> &Path {
        &self.path
    }

    /// Append one event: assign its id and timestamp, push it onto the
    /// sequence, and rewrite the backing file in full.
    ///
    /// Ids are `max(existing) + 1` rather than `last + 1`, so uniqueness
    /// survives out-of-band edits to the file.
    ///
    /// On a persistence failure the in-memory append is NOT rolled back;
    /// memory and disk diverge until the next successful write. Callers
    /// should treat that as an alerting condition.
    pub fn append(&self, draft: EventDraft) -> StoreResult<GasEvent> {
        let mut events = self.events.write();

        let next_id = events.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let event = draft.into_event(next_id, rfc3339_now());
        events.push(event.clone());

        let data = serde_json::to_string_pretty(&*events).map_err(StoreError::Encode)?;
        atomic_write(&self.path, &data).map_err(StoreError::Write)?;

        tracing::info!(id = event.id, "appended event");
        Ok(event)
    }
}
