pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route("/api/v1/resumes/generate", post(generation::handle_generate))
        // Path used by the existing browser client
        .route("/api/generate", post(generation::handle_generate))
        // Stored resume document
        .route(
            "/api/v1/resume",
            get(resumes::handle_get_resume).put(resumes::handle_save_resume),
        )
        .with_state(state)
}
