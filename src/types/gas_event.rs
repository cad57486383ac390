//! Gas event record types

use serde::{Deserialize, Serialize};

/// A stored gas event submission.
///
/// `id` and `created_at` are assigned by the store when the record is
/// appended and are immutable afterwards. All other fields come from the
/// caller and default to their zero values when absent from the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasEvent {
    pub id: u64,
    #[serde(default)]
    pub gamer_tag: String,
    #[serde(default)]
    pub event_date: String,
    #[serde(default)]
    pub event_location: String,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub smell_level: String,
    #[serde(default)]
    pub loudness: i64,
    #[serde(default)]
    pub wetness: String,
    #[serde(default)]
    pub collateral: Vec<String>,
    #[serde(default)]
    pub victim: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub created_at: String,
}

/// A caller-supplied gas event, before the store assigns `id` and
/// `createdAt`. This is the POST body shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    #[serde(default)]
    pub gamer_tag: String,
    #[serde(default)]
    pub event_date: String,
    #[serde(default)]
    pub event_location: String,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub smell_level: String,
    #[serde(default)]
    pub loudness: i64,
    #[serde(default)]
    pub wetness: String,
    #[serde(default)]
    pub collateral: Vec<String>,
    #[serde(default)]
    pub victim: String,
    #[serde(default)]
    pub notes: String,
}

impl EventDraft {
    /// Finalize the draft into a stored record.
    pub(crate) fn into_event(self, id: u64, created_at: String) -> GasEvent {
        GasEvent {
            id,
            gamer_tag: self.gamer_tag,
            event_date: self.event_date,
            event_location: self.event_location,
            duration: self.duration,
            smell_level: self.smell_level,
            loudness: self.loudness,
            wetness: self.wetness,
            collateral: self.collateral,
            victim: self.victim,
            notes: self.notes,
            created_at,
        }
    }
}
