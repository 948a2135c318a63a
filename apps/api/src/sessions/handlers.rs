//! Axum route handlers for the session API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::session::{NewSuggestion, Session, Suggestion};
use crate::sessions::final_resume::FinalResume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ResumeSubmission {
    pub latex_code: String,
    pub job_url: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub session_id: String,
    pub new_status: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub message: &'static str,
    pub suggestion: Suggestion,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /submit_resume
pub async fn handle_submit_resume(
    State(state): State<AppState>,
    Json(submission): Json<ResumeSubmission>,
) -> Json<SubmitResponse> {
    let session = state
        .store
        .create_session(submission.latex_code, submission.job_url)
        .await;
    Json(SubmitResponse {
        session_id: session.session_id,
    })
}

/// GET /session/:session_id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Session>, AppError> {
    Ok(Json(state.store.get_session(&session_id).await?))
}

/// POST /session/:session_id/status?status=...
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<StatusResponse>, AppError> {
    let session = state.store.update_status(&session_id, query.status).await?;
    Ok(Json(StatusResponse {
        session_id: session.session_id,
        new_status: session.status,
    }))
}

/// POST /session/:session_id/add_suggestion
pub async fn handle_add_suggestion(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(suggestion): Json<NewSuggestion>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let suggestion = state.store.add_suggestion(&session_id, suggestion).await?;
    Ok(Json(SuggestionResponse {
        message: "Suggestion added",
        suggestion,
    }))
}

/// POST /session/:session_id/approve_suggestion/:suggestion_id
pub async fn handle_approve_suggestion(
    State(state): State<AppState>,
    Path((session_id, suggestion_id)): Path<(String, String)>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let suggestion = state
        .store
        .approve_suggestion(&session_id, &suggestion_id)
        .await?;
    Ok(Json(SuggestionResponse {
        message: "Suggestion approved",
        suggestion,
    }))
}

/// POST /session/:session_id/reject_suggestion/:suggestion_id
pub async fn handle_reject_suggestion(
    State(state): State<AppState>,
    Path((session_id, suggestion_id)): Path<(String, String)>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let suggestion = state
        .store
        .reject_suggestion(&session_id, &suggestion_id)
        .await?;
    Ok(Json(SuggestionResponse {
        message: "Suggestion rejected",
        suggestion,
    }))
}

/// GET /session/:session_id/final_resume
///
/// Returns the submitted LaTeX alongside the text with every approved
/// suggestion applied in insertion order.
pub async fn handle_final_resume(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<FinalResume>, AppError> {
    Ok(Json(state.store.final_resume(&session_id).await?))
}
