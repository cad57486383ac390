//! Atomic file operations
//!
//! This module provides utilities for atomic file writes to prevent
//! data corruption during crashes or power failures.
//!
//! # Pattern
//!
//! 1. Write to a temporary file (.tmp)
//! 2. Call sync_all() to flush to disk
//! 3. Rename temp file to final path (atomic on most filesystems)
//!
//! This ensures that the final file is either:
//! - The old version (if crash before rename)
//! - The new version (if rename completed)
//! - Never a partial/corrupted state

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Atomically write content to a file
///
/// This function:
/// 1. Writes content to a .tmp file
/// 2. Syncs the file to disk
/// 3. Atomically renames to the final path
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
    let path = path.as_ref();
    let temp_path = path.with_extension("tmp");

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Write to temp file
    let mut file = File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;

    // Sync to disk (ensure data is durable)
    file.sync_all()?;

    // Atomic rename
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Remove a leftover .tmp sibling of `path` from an interrupted write.
///
/// Returns whether a stale temp file was found and removed.
pub fn remove_stale_temp<P: AsRef<Path>>(path: P) -> io::Result<bool> {
    let temp_path = path.as_ref().with_extension("tmp");
    if temp_path.exists() {
        fs::remove_file(&temp_path)?;
        return Ok(true);
    }
    Ok(false)
}
