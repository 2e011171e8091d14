// All LLM prompt text for resume generation.
// Reuses cross-cutting fragments from llm_client::prompts.

use serde_json::Value;

use crate::llm_client::prompts::{JSON_ONLY_REMINDER, JSON_ONLY_SYSTEM};

/// Target role used when the caller does not supply one.
pub const DEFAULT_ROLE: &str = "general";

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Role and hard constraints. Opens every generation prompt.
pub const SYSTEM_RULES: &str = "You are an expert technical resume writer who optimizes \
resumes for Applicant Tracking Systems (ATS).

HARD CONSTRAINTS:
- Do NOT write LaTeX, HTML or any other markup. The document is typeset separately.
- Return ONLY a JSON object matching the output format below.
- Preserve every field present in the input. Never drop a job, project, degree or role.
- Do NOT invent employers, dates, degrees, metrics or technologies that are not in the input.";

/// Content optimization rules.
pub const CONTENT_RULES: &str = "OPTIMIZATION RULES:
- Max 3 bullets per experience
- Max 2 bullets per project
- Each bullet ≤ 18 words
- Start with strong action verbs (Developed, Implemented, Led, etc.)
- Include metrics where possible (increased by X%, saved $Y, etc.)
- Remove filler words and soft skills without proof
- Keep content dense for one-page resume";

/// Per-section structure rules.
pub const SECTION_RULES: &str = "SECTION STRUCTURE:
Education:
- School/University name
- Degree (e.g., Bachelor of Science in Computer Science)
- Graduation date or dates attended
- GPA (optional, only if 3.5+)

Experience:
- Job title
- Company name
- Location (city, state or remote)
- Dates (Month Year - Month Year)
- 2-3 optimized bullet points

Projects:
- Project name
- Technologies used (comma-separated)
- Dates (Month Year - Month Year or ongoing)
- 1-2 bullet points

Skills:
- Comma-separated list by category
- Keep lists concise (5-8 items per category)

Leadership:
- Title/Role
- Organization
- Dates
- 1-2 bullet points";

/// The exact reply schema. Must stay in step with `models::resume::ResumeRecord`.
pub const OUTPUT_SCHEMA: &str = r#"{
  "name": "string",
  "email": "string",
  "phone": "string",
  "linkedin": "string (full URL or empty)",
  "github": "string (full URL or empty)",
  "education": [
    {
      "school": "string",
      "location": "string",
      "degree": "string",
      "dates": "string"
    }
  ],
  "experience": [
    {
      "title": "string",
      "company": "string",
      "location": "string",
      "dates": "string",
      "points": ["string", "string", ...]
    }
  ],
  "projects": [
    {
      "name": "string",
      "tech": "string (comma-separated)",
      "dates": "string",
      "points": ["string", ...]
    }
  ],
  "skills": {
    "languages": "string (comma-separated)",
    "frameworks": "string (comma-separated)",
    "tools": "string (comma-separated)",
    "libraries": "string (comma-separated)"
  },
  "leadership": [
    {
      "title": "string",
      "organization": "string",
      "dates": "string",
      "points": ["string"]
    }
  ]
}"#;

/// System instruction sent alongside the prompt. Restates the schema so it reaches the
/// model through both channels.
pub fn system_instruction() -> String {
    format!(
        "You are a resume optimization engine that outputs structured data. {JSON_ONLY_SYSTEM}\n\n\
        The JSON object MUST have exactly this shape:\n{OUTPUT_SCHEMA}"
    )
}

/// Builds the generation prompt for `resume`, optimized toward `role`.
///
/// Order: system rules, target role, content rules, section rules, task,
/// input resume (pretty JSON), output schema.
pub fn build_prompt(resume: &Value, role: &str) -> String {
    let resume_json = serde_json::to_string_pretty(resume).unwrap_or_else(|_| resume.to_string());

    format!(
        "{SYSTEM_RULES}

TARGET ROLE: {role}

{CONTENT_RULES}

{SECTION_RULES}

{RULE}
📌 YOUR TASK
{RULE}
Optimize the following resume data for a {role} role.
Keep all existing fields.
Improve bullet points for impact.
Remove weak content.

{RULE}
📦 USER RESUME DATA
{RULE}
{resume_json}

{RULE}
📤 OUTPUT FORMAT (MUST BE VALID JSON)
{RULE}
Return the optimized resume as a single valid JSON object with these exact fields:
{OUTPUT_SCHEMA}

{JSON_ONLY_REMINDER}
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("prompt is missing {needle:?}"))
    }

    #[test]
    fn test_prompt_fragments_in_fixed_order() {
        let prompt = build_prompt(&json!({"name": "Ada"}), "backend engineer");

        let order = [
            position(&prompt, "HARD CONSTRAINTS"),
            position(&prompt, "TARGET ROLE: backend engineer"),
            position(&prompt, "OPTIMIZATION RULES"),
            position(&prompt, "SECTION STRUCTURE"),
            position(&prompt, "Optimize the following resume data for a backend engineer role."),
            position(&prompt, "USER RESUME DATA"),
            position(&prompt, "OUTPUT FORMAT"),
            position(&prompt, "CRITICAL: Return ONLY the JSON object"),
        ];
        assert!(order.windows(2).all(|w| w[0] < w[1]), "order: {order:?}");
    }

    #[test]
    fn test_prompt_embeds_pretty_printed_resume() {
        let resume = json!({"name": "Ada", "skills": {"languages": "Rust"}});
        let prompt = build_prompt(&resume, DEFAULT_ROLE);
        assert!(prompt.contains(&serde_json::to_string_pretty(&resume).unwrap()));
        assert!(prompt.contains("TARGET ROLE: general"));
    }

    #[test]
    fn test_schema_names_every_record_field() {
        let prompt = build_prompt(&json!({}), DEFAULT_ROLE);
        for field in [
            "\"name\"",
            "\"email\"",
            "\"phone\"",
            "\"linkedin\"",
            "\"github\"",
            "\"education\"",
            "\"school\"",
            "\"degree\"",
            "\"experience\"",
            "\"company\"",
            "\"points\"",
            "\"projects\"",
            "\"tech\"",
            "\"leadership\"",
            "\"organization\"",
            "\"skills\"",
            "\"languages\"",
            "\"frameworks\"",
            "\"tools\"",
            "\"libraries\"",
        ] {
            assert!(prompt.contains(field), "schema missing {field}");
        }
    }

    #[test]
    fn test_system_instruction_restates_schema() {
        let system = system_instruction();
        assert!(system.contains(OUTPUT_SCHEMA));
        assert!(system.contains("Do NOT use markdown code fences"));
    }
}
