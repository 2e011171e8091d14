use sqlx::PgPool;

use crate::generation::generator::ResumeGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Generation pipeline. Holds the LLM backend as `Arc<dyn CompletionModel>`.
    pub generator: ResumeGenerator,
}
