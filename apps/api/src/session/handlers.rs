//! Axum route handlers for the Session API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::history::GenerationRecord;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub label: String,
    #[serde(flatten)]
    pub record: GenerationRecord,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub session_id: Uuid,
    pub entries: Vec<HistoryEntry>,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreateSessionResponse>) {
    let session_id = state.sessions.create().await;
    (StatusCode::CREATED, Json(CreateSessionResponse { session_id }))
}

/// GET /api/v1/sessions/:id/history
///
/// Returns the session's generations, newest first, each with its sidebar label.
pub async fn handle_get_history(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<HistoryResponse>, AppError> {
    let history = state.sessions.history(session_id).await?;

    let entries = history
        .entries()
        .iter()
        .enumerate()
        .map(|(index, record)| HistoryEntry {
            label: history.label(index).unwrap_or_default(),
            record: record.clone(),
        })
        .collect();

    Ok(Json(HistoryResponse {
        session_id,
        entries,
    }))
}
