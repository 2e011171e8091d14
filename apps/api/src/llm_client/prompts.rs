// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Closing instruction for prompts whose reply is parsed as JSON.
pub const JSON_ONLY_REMINDER: &str =
    "CRITICAL: Return ONLY the JSON object. No markdown, no code blocks, no explanations.";
