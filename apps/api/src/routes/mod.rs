pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::sessions::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/submit_resume", post(handlers::handle_submit_resume))
        .route("/session/:session_id", get(handlers::handle_get_session))
        .route(
            "/session/:session_id/status",
            post(handlers::handle_update_status),
        )
        .route(
            "/session/:session_id/add_suggestion",
            post(handlers::handle_add_suggestion),
        )
        .route(
            "/session/:session_id/approve_suggestion/:suggestion_id",
            post(handlers::handle_approve_suggestion),
        )
        .route(
            "/session/:session_id/reject_suggestion/:suggestion_id",
            post(handlers::handle_reject_suggestion),
        )
        .route(
            "/session/:session_id/final_resume",
            get(handlers::handle_final_resume),
        )
        .with_state(state)
}
