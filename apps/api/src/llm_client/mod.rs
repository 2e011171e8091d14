/// LLM Client — the single point of entry for all model calls in the resume API.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// Callers depend on the `CompletionModel` trait; `LlmClient` is the production backend.
///
/// One request, one HTTP call: no retries happen here. Retrying is the caller's decision.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "claude-sonnet-4-5";
/// MODEL rejects requests that set both `temperature` and `top_p`, so only temperature is sent.
const SEND_TOP_P: bool = false;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fixed sampling parameters sent with every completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

/// Low-temperature sampling for structured resume output. The token ceiling is sized so a
/// full one-page resume never gets cut off mid-JSON.
pub const RESUME_SAMPLING: SamplingConfig = SamplingConfig {
    temperature: 0.2,
    top_p: 0.9,
    top_k: 40,
    max_output_tokens: 8192,
};

/// A text-completion backend.
///
/// Carried as `Arc<dyn CompletionModel>` so tests can substitute a fake.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Sends one prompt and returns the raw completion text (possibly empty).
    async fn complete(
        &self,
        prompt: &str,
        system: &str,
        sampling: &SamplingConfig,
    ) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    top_k: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Anthropic Messages API backend.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    /// `timeout` bounds the whole HTTP exchange; it is the only timeout on the call path.
    pub fn new(api_key: String, timeout: std::time::Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
        })
    }

    /// Makes a single call to the Messages API, returning the full response object.
    pub async fn call(
        &self,
        prompt: &str,
        system: &str,
        sampling: &SamplingConfig,
    ) -> Result<LlmResponse, LlmError> {
        let request_body = request_body(prompt, system, sampling);

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse error message
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        Ok(llm_response)
    }
}

/// Builds the Messages API body for one user prompt.
fn request_body<'a>(
    prompt: &'a str,
    system: &'a str,
    sampling: &SamplingConfig,
) -> AnthropicRequest<'a> {
    AnthropicRequest {
        model: MODEL,
        max_tokens: sampling.max_output_tokens,
        temperature: sampling.temperature,
        top_p: SEND_TOP_P.then_some(sampling.top_p),
        top_k: sampling.top_k,
        system,
        messages: vec![AnthropicMessage {
            role: "user",
            content: prompt,
        }],
    }
}

#[async_trait]
impl CompletionModel for LlmClient {
    async fn complete(
        &self,
        prompt: &str,
        system: &str,
        sampling: &SamplingConfig,
    ) -> Result<String, LlmError> {
        let response = self.call(prompt, system, sampling).await?;
        Ok(response.text().unwrap_or_default().to_string())
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
///
/// Any info string on the opening fence line (`json`, `JSON`, `jsonc`, ...) is dropped.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(stripped) = text.strip_prefix("```") else {
        return text;
    };
    let body = match stripped.split_once('\n') {
        Some((info, rest)) if is_info_string(info) => rest,
        None if is_info_string(stripped) => "",
        _ => stripped,
    };
    let body = body.trim();
    body.strip_suffix("```").map(|s| s.trim()).unwrap_or(body)
}

/// A fence info string is a single word such as `json`; JSON content never looks like one.
fn is_info_string(line: &str) -> bool {
    line.trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.'))
}
