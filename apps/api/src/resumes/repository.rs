use sqlx::{types::Json, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::generation::normalize::normalize;
use crate::models::resume::{EducationEntry, ResumeRecord, ResumeRow, SkillSet};

/// Idempotent DDL for the `resumes` table, applied at startup.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS resumes (
    user_id    UUID PRIMARY KEY,
    data       JSONB,
    name       TEXT,
    email      TEXT,
    education  TEXT,
    skills     TEXT,
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

/// Returns the stored row for `user_id`, if any.
pub async fn find_resume(pool: &PgPool, user_id: Uuid) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Inserts or replaces the document for `user_id`.
/// Legacy flattened columns are left untouched; `data` takes precedence once written.
pub async fn upsert_resume(
    pool: &PgPool,
    user_id: Uuid,
    record: &ResumeRecord,
) -> Result<ResumeRow, sqlx::Error> {
    let row = sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes (user_id, data, updated_at)
        VALUES ($1, $2, now())
        ON CONFLICT (user_id)
        DO UPDATE SET data = EXCLUDED.data, updated_at = EXCLUDED.updated_at
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(Json(record))
    .fetch_one(pool)
    .await?;

    info!("Saved resume for user {user_id}");
    Ok(row)
}

/// Reads a stored row as a `ResumeRecord`.
///
/// Rows written before the JSON document existed only carry the flattened columns:
/// `education` becomes a single entry's school, `skills` becomes the language list.
pub fn record_from_row(row: &ResumeRow) -> ResumeRecord {
    if let Some(data) = row.data.as_ref().filter(|d| !d.is_null()) {
        return normalize(data);
    }

    let legacy = |col: &Option<String>| col.as_deref().unwrap_or_default().trim().to_string();

    let education = legacy(&row.education);
    ResumeRecord {
        name: legacy(&row.name),
        email: legacy(&row.email),
        education: if education.is_empty() {
            Vec::new()
        } else {
            vec![EducationEntry {
                school: education,
                ..Default::default()
            }]
        },
        skills: SkillSet {
            languages: legacy(&row.skills),
            ..Default::default()
        },
        ..Default::default()
    }
}
