use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Canonical resume document
// ────────────────────────────────────────────────────────────────────────────

/// The canonical resume document consumed by the renderer and produced by the model.
///
/// Every sequence is always present and every leaf is always a string.
/// Sequence order is the order sections and bullets appear in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub leadership: Vec<LeadershipEntry>,
    pub skills: SkillSet,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub school: String,
    pub location: String,
    pub degree: String,
    pub dates: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub dates: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub name: String,
    /// Comma-joined technology list.
    pub tech: String,
    pub dates: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadershipEntry {
    pub title: String,
    pub organization: String,
    pub dates: String,
    pub points: Vec<String>,
}

/// Skill categories, each a comma-joined list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillSet {
    pub languages: String,
    pub frameworks: String,
    pub tools: String,
    pub libraries: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Persistence row
// ────────────────────────────────────────────────────────────────────────────

/// One stored resume per user.
///
/// `data` holds the document. `name`, `email`, `education` and `skills` are the legacy
/// flattened columns written by the first version of the builder form; they are only
/// consulted when `data` is NULL.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub user_id: Uuid,
    pub data: Option<Value>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub education: Option<String>,
    pub skills: Option<String>,
    pub updated_at: DateTime<Utc>,
}
