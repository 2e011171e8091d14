//! Axum route handlers for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::generator::GenerateRequest;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// The rendered LaTeX document.
    pub resume: String,
}

/// POST /api/v1/resumes/generate (also mounted at POST /api/generate)
///
/// Body: `{ "resume": {...}, "role": "optional target role" }`.
/// Every failure, including an unreadable body, comes back as a structured JSON error.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(request) = payload?;

    let resume = state.generator.generate(&request).await?;

    Ok(Json(GenerateResponse { resume }))
}
