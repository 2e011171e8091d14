use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::normalize::normalize;
use crate::models::resume::ResumeRecord;
use crate::resumes::repository::{find_resume, record_from_row, upsert_resume};
use crate::state::AppState;

/// The user id issued by the identity provider.
#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// GET /api/v1/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
    query: Result<Query<UserIdQuery>, QueryRejection>,
) -> Result<Json<ResumeRecord>, AppError> {
    let Query(params) = query?;
    let row = find_resume(&state.db, params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No resume saved for user {}", params.user_id)))?;

    Ok(Json(record_from_row(&row)))
}

/// PUT /api/v1/resume
///
/// Accepts any JSON shape; the stored document is always the normalised record.
pub async fn handle_save_resume(
    State(state): State<AppState>,
    query: Result<Query<UserIdQuery>, QueryRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ResumeRecord>, AppError> {
    let Query(params) = query?;
    let Json(body) = payload?;

    let record = normalize(&body);
    let row = upsert_resume(&state.db, params.user_id, &record).await?;

    Ok(Json(record_from_row(&row)))
}
