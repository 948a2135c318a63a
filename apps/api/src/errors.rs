use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::sessions::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::SessionNotFound(_) => AppError::NotFound("Session not found".to_string()),
            StoreError::SuggestionNotFound { .. } => {
                AppError::NotFound("Suggestion not found".to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
        };

        tracing::debug!("Request failed: {self}");

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_session_maps_to_session_message() {
        let err: AppError = StoreError::SessionNotFound("session_9".to_string()).into();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "Session not found"));
    }

    #[test]
    fn test_missing_suggestion_maps_to_suggestion_message() {
        let err: AppError = StoreError::SuggestionNotFound {
            session_id: "session_1".to_string(),
            suggestion_id: "nope".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "Suggestion not found"));
    }

    #[test]
    fn test_not_found_renders_404() {
        let response = AppError::NotFound("Session not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
