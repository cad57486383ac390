//! Time and timestamp utilities

use chrono::{SecondsFormat, Utc};

/// Current wall-clock time as an RFC 3339 / ISO-8601 string.
///
/// Second precision, UTC with a `Z` suffix - the shape stamped on every
/// stored record's `createdAt`.
pub fn rfc3339_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
