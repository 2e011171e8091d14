//! LaTeX escaping for text interpolated into the resume template.
//!
//! Escaping is a single pass over the input characters, so a replacement is never
//! itself re-escaped. It is NOT idempotent: escaping twice double-escapes.

use serde_json::Value;

use crate::models::resume::{
    EducationEntry, ExperienceEntry, LeadershipEntry, ProjectEntry, ResumeRecord, SkillSet,
};

/// Returns the replacement for a LaTeX-reserved character, or `None` if `c` is safe.
fn replacement(c: char) -> Option<&'static str> {
    let escaped = match c {
        '\\' => r"\textbackslash{}",
        '{' => r"\{",
        '}' => r"\}",
        '$' => r"\$",
        '&' => r"\&",
        '#' => r"\#",
        '_' => r"\_",
        '^' => r"\^{}",
        '~' => r"\textasciitilde{}",
        '%' => r"\%",
        '|' => r"\textbar{}",
        '<' => r"\textless{}",
        '>' => r"\textgreater{}",
        '"' => "''",
        _ => return None,
    };
    Some(escaped)
}

/// Escapes `text` for literal inclusion in a LaTeX document body.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match replacement(c) {
            Some(r) => out.push_str(r),
            None => out.push(c),
        }
    }
    out
}

/// Applies [`escape`] to every string leaf of a value, producing a new value.
///
/// Sequence order and object key sets are preserved; non-string leaves are left as-is.
pub trait EscapeDeep {
    fn escape_deep(&self) -> Self;
}

impl EscapeDeep for String {
    fn escape_deep(&self) -> Self {
        escape(self)
    }
}

impl<T: EscapeDeep> EscapeDeep for Vec<T> {
    fn escape_deep(&self) -> Self {
        self.iter().map(EscapeDeep::escape_deep).collect()
    }
}

impl EscapeDeep for Value {
    fn escape_deep(&self) -> Self {
        match self {
            Value::String(s) => Value::String(escape(s)),
            Value::Array(items) => Value::Array(items.iter().map(EscapeDeep::escape_deep).collect()),
            Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.escape_deep()))
                    .collect(),
            ),
            other => other.clone(),
        }
    }
}

impl EscapeDeep for ResumeRecord {
    fn escape_deep(&self) -> Self {
        ResumeRecord {
            name: self.name.escape_deep(),
            email: self.email.escape_deep(),
            phone: self.phone.escape_deep(),
            linkedin: self.linkedin.escape_deep(),
            github: self.github.escape_deep(),
            education: self.education.escape_deep(),
            experience: self.experience.escape_deep(),
            projects: self.projects.escape_deep(),
            leadership: self.leadership.escape_deep(),
            skills: self.skills.escape_deep(),
        }
    }
}

impl EscapeDeep for EducationEntry {
    fn escape_deep(&self) -> Self {
        EducationEntry {
            school: self.school.escape_deep(),
            location: self.location.escape_deep(),
            degree: self.degree.escape_deep(),
            dates: self.dates.escape_deep(),
        }
    }
}

impl EscapeDeep for ExperienceEntry {
    fn escape_deep(&self) -> Self {
        ExperienceEntry {
            title: self.title.escape_deep(),
            company: self.company.escape_deep(),
            location: self.location.escape_deep(),
            dates: self.dates.escape_deep(),
            points: self.points.escape_deep(),
        }
    }
}

impl EscapeDeep for ProjectEntry {
    fn escape_deep(&self) -> Self {
        ProjectEntry {
            name: self.name.escape_deep(),
            tech: self.tech.escape_deep(),
            dates: self.dates.escape_deep(),
            points: self.points.escape_deep(),
        }
    }
}

impl EscapeDeep for LeadershipEntry {
    fn escape_deep(&self) -> Self {
        LeadershipEntry {
            title: self.title.escape_deep(),
            organization: self.organization.escape_deep(),
            dates: self.dates.escape_deep(),
            points: self.points.escape_deep(),
        }
    }
}

impl EscapeDeep for SkillSet {
    fn escape_deep(&self) -> Self {
        SkillSet {
            languages: self.languages.escape_deep(),
            frameworks: self.frameworks.escape_deep(),
            tools: self.tools.escape_deep(),
            libraries: self.libraries.escape_deep(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escape_percent_ampersand_dollar() {
        assert_eq!(escape("50% & $100"), r"50\% \& \$100");
    }

    #[test]
    fn test_escape_full_table() {
        assert_eq!(escape(r"\"), r"\textbackslash{}");
        assert_eq!(escape("{x}"), r"\{x\}");
        assert_eq!(escape("#1_a"), r"\#1\_a");
        assert_eq!(escape("x^2"), r"x\^{}2");
        assert_eq!(escape("~/bin"), r"\textasciitilde{}/bin");
        assert_eq!(escape("a|b"), r"a\textbar{}b");
        assert_eq!(escape("<tag>"), r"\textless{}tag\textgreater{}");
        assert_eq!(escape("say \"hi\""), "say ''hi''");
    }

    #[test]
    fn test_backslash_braces_are_not_double_escaped() {
        // The braces introduced by \textbackslash{} must survive untouched
        assert_eq!(escape(r"a\b"), r"a\textbackslash{}b");
    }

    #[test]
    fn test_escape_is_not_idempotent() {
        let once = escape("100%");
        assert_eq!(once, r"100\%");
        assert_eq!(escape(&once), r"100\textbackslash{}\%");
    }

    #[test]
    fn test_escape_empty_and_unicode() {
        assert_eq!(escape(""), "");
        assert_eq!(escape("Zürich — café"), "Zürich — café");
    }

    #[test]
    fn test_escape_deep_json_preserves_shape() {
        let value = json!({
            "name": "A & B",
            "points": ["50%", "plain"],
            "count": 3,
            "active": true,
            "missing": null,
            "nested": {"tag": "#rust"}
        });
        let escaped = value.escape_deep();
        assert_eq!(
            escaped,
            json!({
                "name": r"A \& B",
                "points": [r"50\%", "plain"],
                "count": 3,
                "active": true,
                "missing": null,
                "nested": {"tag": r"\#rust"}
            })
        );
    }

    #[test]
    fn test_escape_deep_record_touches_every_leaf() {
        let record = ResumeRecord {
            name: "R&D".to_string(),
            experience: vec![ExperienceEntry {
                title: "C# Dev".to_string(),
                points: vec!["Cut costs by $5k".to_string(), "snake_case".to_string()],
                ..Default::default()
            }],
            skills: SkillSet {
                languages: "C#, F#".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let escaped = record.escape_deep();
        assert_eq!(escaped.name, r"R\&D");
        assert_eq!(escaped.experience[0].title, r"C\# Dev");
        assert_eq!(
            escaped.experience[0].points,
            vec![r"Cut costs by \$5k".to_string(), r"snake\_case".to_string()]
        );
        assert_eq!(escaped.skills.languages, r"C\#, F\#");
        // input untouched
        assert_eq!(record.name, "R&D");
    }
}
