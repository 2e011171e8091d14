//! Resume normaliser — total coercion of arbitrary JSON into a `ResumeRecord`.
//!
//! Never fails. Missing or malformed fields fall back to their empty value, so the
//! renderer can assume a fully shaped record.

use serde_json::{Map, Value};

use crate::models::resume::{
    EducationEntry, ExperienceEntry, LeadershipEntry, ProjectEntry, ResumeRecord, SkillSet,
};

/// Coerces `input` into a complete `ResumeRecord`.
pub fn normalize(input: &Value) -> ResumeRecord {
    let Some(obj) = input.as_object() else {
        return ResumeRecord::default();
    };

    ResumeRecord {
        name: text(obj, "name"),
        email: text(obj, "email"),
        phone: text(obj, "phone"),
        linkedin: text(obj, "linkedin"),
        github: text(obj, "github"),
        education: entries(obj, "education", |e| EducationEntry {
            school: text(e, "school"),
            location: text(e, "location"),
            degree: text(e, "degree"),
            dates: text(e, "dates"),
        }),
        experience: entries(obj, "experience", |e| ExperienceEntry {
            title: text(e, "title"),
            company: text(e, "company"),
            location: text(e, "location"),
            dates: text(e, "dates"),
            points: points(e),
        }),
        projects: entries(obj, "projects", |e| ProjectEntry {
            name: text(e, "name"),
            tech: joined_text(e, "tech"),
            dates: text(e, "dates"),
            points: points(e),
        }),
        leadership: entries(obj, "leadership", |e| LeadershipEntry {
            title: text(e, "title"),
            organization: text(e, "organization"),
            dates: text(e, "dates"),
            points: points(e),
        }),
        skills: skills(obj.get("skills")),
    }
}

/// String leaf rule: strings pass through, numbers become their decimal text,
/// everything else becomes empty.
fn leaf(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn text(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key).map(leaf).unwrap_or_default()
}

/// Like [`text`], but an array of leaves is joined with `", "`.
fn joined_text(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .map(leaf)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => leaf(other),
        None => String::new(),
    }
}

/// Maps each object element of `obj[key]`; non-object elements are skipped.
fn entries<T>(
    obj: &Map<String, Value>,
    key: &str,
    map: impl Fn(&Map<String, Value>) -> T,
) -> Vec<T> {
    match obj.get(key) {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_object).map(map).collect(),
        _ => Vec::new(),
    }
}

/// String and number elements are kept in order; anything else is dropped.
fn points(entry: &Map<String, Value>) -> Vec<String> {
    match entry.get("points") {
        Some(Value::Array(items)) => items
            .iter()
            .filter(|p| p.is_string() || p.is_number())
            .map(leaf)
            .collect(),
        _ => Vec::new(),
    }
}

fn skills(value: Option<&Value>) -> SkillSet {
    let Some(obj) = value.and_then(Value::as_object) else {
        return SkillSet::default();
    };
    SkillSet {
        languages: joined_text(obj, "languages"),
        frameworks: joined_text(obj, "frameworks"),
        tools: joined_text(obj, "tools"),
        libraries: joined_text(obj, "libraries"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_record() -> ResumeRecord {
        ResumeRecord {
            name: "Grace Hopper".to_string(),
            email: "grace@navy.mil".to_string(),
            phone: "555-0199".to_string(),
            linkedin: "https://linkedin.com/in/grace".to_string(),
            github: "https://github.com/grace".to_string(),
            education: vec![EducationEntry {
                school: "Yale".to_string(),
                location: "New Haven, CT".to_string(),
                degree: "PhD Mathematics".to_string(),
                dates: "1934".to_string(),
            }],
            experience: vec![ExperienceEntry {
                title: "Rear Admiral".to_string(),
                company: "US Navy".to_string(),
                location: "Arlington, VA".to_string(),
                dates: "1943 -- 1986".to_string(),
                points: vec!["Developed the first compiler".to_string()],
            }],
            projects: vec![ProjectEntry {
                name: "COBOL".to_string(),
                tech: "FLOW-MATIC, UNIVAC".to_string(),
                dates: "1959".to_string(),
                points: vec![],
            }],
            leadership: vec![LeadershipEntry {
                title: "Chair".to_string(),
                organization: "CODASYL".to_string(),
                dates: "1959".to_string(),
                points: vec!["Led language standardisation".to_string()],
            }],
            skills: SkillSet {
                languages: "COBOL, FORTRAN".to_string(),
                frameworks: String::new(),
                tools: "UNIVAC I".to_string(),
                libraries: String::new(),
            },
        }
    }

    #[test]
    fn test_non_objects_yield_empty_record() {
        for input in [json!(null), json!({}), json!(42), json!("resume"), json!([1, 2])] {
            assert_eq!(normalize(&input), ResumeRecord::default(), "input: {input}");
        }
    }

    #[test]
    fn test_malformed_shapes_are_coerced() {
        let input = json!({
            "name": null,
            "email": ["not", "a", "string"],
            "phone": 5550100,
            "education": "MIT",
            "experience": [null, "junk", {"title": "Dev", "points": "one string"}],
            "projects": {"name": "not an array"},
            "leadership": [{"title": true, "points": [1, null, "Led", {}]}],
            "skills": "Rust, Go"
        });
        let record = normalize(&input);

        assert_eq!(record.name, "");
        assert_eq!(record.email, "");
        assert_eq!(record.phone, "5550100");
        assert!(record.education.is_empty());
        assert_eq!(record.experience.len(), 1);
        assert_eq!(record.experience[0].title, "Dev");
        assert!(record.experience[0].points.is_empty());
        assert!(record.projects.is_empty());
        assert_eq!(record.leadership[0].title, "");
        assert_eq!(record.leadership[0].points, vec!["1", "Led"]);
        assert_eq!(record.skills, SkillSet::default());
    }

    #[test]
    fn test_missing_skill_fields_default_to_empty() {
        let record = normalize(&json!({"skills": {"languages": "Go"}}));
        assert_eq!(record.skills.languages, "Go");
        assert_eq!(record.skills.frameworks, "");
        assert_eq!(record.skills.tools, "");
        assert_eq!(record.skills.libraries, "");
    }

    #[test]
    fn test_array_skills_and_tech_are_comma_joined() {
        let record = normalize(&json!({
            "skills": {"languages": ["Rust", "Go", ""], "tools": ["git"]},
            "projects": [{"name": "p", "tech": ["axum", "sqlx"]}]
        }));
        assert_eq!(record.skills.languages, "Rust, Go");
        assert_eq!(record.skills.tools, "git");
        assert_eq!(record.projects[0].tech, "axum, sqlx");
    }

    #[test]
    fn test_order_is_preserved() {
        let record = normalize(&json!({
            "experience": [
                {"title": "First", "points": ["a", "b", "c"]},
                {"title": "Second", "points": ["d"]}
            ]
        }));
        let titles: Vec<_> = record.experience.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
        assert_eq!(record.experience[0].points, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_normalize_is_noop_on_well_formed_record() {
        let record = full_record();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(normalize(&value), record);
    }

    #[test]
    fn test_normalize_is_noop_on_default_record() {
        let value = serde_json::to_value(ResumeRecord::default()).unwrap();
        assert_eq!(normalize(&value), ResumeRecord::default());
    }
}
