//! Gas event endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use super::ApiError;
use crate::store::EventStore;
use crate::types::EventDraft;

/// GET /api/events - List all stored events
///
/// The response body is the bare JSON array, the same shape as the backing
/// file.
pub async fn list_events(State(store): State<Arc<EventStore>>) -> impl IntoResponse {
    tracing::debug!("retrieving all events");
    Json(store.list())
}

/// POST /api/events - Append one event
///
/// Malformed bodies are rejected by the `Json` extractor before the store
/// is touched. A persistence failure is a 500: the record is in memory but
/// not safely on disk.
pub async fn create_event(
    State(store): State<Arc<EventStore>>,
    Json(draft): Json<EventDraft>,
) -> impl IntoResponse {
    match store.append(draft) {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to persist event; memory and disk have diverged");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::internal(err.to_string())),
            )
                .into_response()
        }
    }
}
