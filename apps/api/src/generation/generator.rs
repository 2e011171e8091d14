//! Resume Generation — orchestrates the full generation pipeline.
//!
//! Flow: validate → build prompt → LLM call → strip fences → parse JSON →
//!       normalize → escape → render LaTeX.
//!
//! Stateless per request: the only shared piece is the injected model backend.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::generation::normalize::normalize;
use crate::generation::prompts::{build_prompt, system_instruction, DEFAULT_ROLE};
use crate::latex::escape::EscapeDeep;
use crate::latex::template::render;
use crate::llm_client::{strip_json_fences, CompletionModel, SamplingConfig, RESUME_SAMPLING};

/// Max characters of unparseable model output echoed back to the caller.
pub const RAW_EXCERPT_CHARS: usize = 200;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for resume generation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    /// Arbitrary-shaped resume data; coerced by the normaliser.
    #[serde(default)]
    pub resume: Option<Value>,
    /// Target job role. Defaults to "general".
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("The model returned no text")]
    EmptyModelOutput,

    #[error("The model output was not valid JSON")]
    ModelOutputNotJson { raw: String },

    #[error("{0}")]
    Upstream(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Turns caller-supplied resume JSON into a LaTeX document via the model.
#[derive(Clone)]
pub struct ResumeGenerator {
    llm: Arc<dyn CompletionModel>,
    sampling: SamplingConfig,
}

impl ResumeGenerator {
    pub fn new(llm: Arc<dyn CompletionModel>) -> Self {
        Self {
            llm,
            sampling: RESUME_SAMPLING,
        }
    }

    /// Runs the pipeline and returns the rendered LaTeX document.
    ///
    /// Steps:
    /// 1. Reject a missing or falsy `resume` (null, false, 0, blank string)
    /// 2. Build prompt + system instruction for the target role
    /// 3. One model call (no retries)
    /// 4. Strip code fences; empty text is an error
    /// 5. Parse JSON; failure carries a bounded excerpt of the raw text
    /// 6. normalize() then escape_deep()
    /// 7. render()
    pub async fn generate(&self, request: &GenerateRequest) -> Result<String, GenerationError> {
        // Step 1: Validate
        let resume = match &request.resume {
            Some(value) if !is_falsy(value) => value,
            _ => return Err(GenerationError::InvalidInput("No resume data".to_string())),
        };

        // Step 2: Prompt
        let role = request
            .role
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_ROLE);
        let prompt = build_prompt(resume, role);
        let system = system_instruction();
        info!("Generating resume for role '{role}' ({} prompt chars)", prompt.len());

        // Step 3: Invoke
        let raw = self
            .llm
            .complete(&prompt, &system, &self.sampling)
            .await
            .map_err(|e| GenerationError::Upstream(e.to_string()))?;

        // Step 4: Extract
        let cleaned = strip_json_fences(&raw);
        if cleaned.is_empty() {
            warn!("Model returned empty output");
            return Err(GenerationError::EmptyModelOutput);
        }

        // Step 5: Parse
        let parsed: Value = serde_json::from_str(cleaned).map_err(|e| {
            warn!("Model output is not JSON: {e}");
            GenerationError::ModelOutputNotJson {
                raw: excerpt(&raw),
            }
        })?;

        // Step 6: Shape
        let record = normalize(&parsed).escape_deep();

        // Step 7: Render
        let latex = render(&record);
        info!(
            "Rendered resume: {} experience, {} projects, {} chars",
            record.experience.len(),
            record.projects.len(),
            latex.len()
        );

        Ok(latex)
    }
}

/// First `RAW_EXCERPT_CHARS` characters of `raw`.
fn excerpt(raw: &str) -> String {
    raw.chars().take(RAW_EXCERPT_CHARS).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

/// Scalars that carry no resume content. Empty objects and arrays still count as input.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.trim().is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
