//! One-page ATS-friendly LaTeX resume template.
//!
//! `render` assumes its input has been normalised and escaped: it interpolates field text
//! verbatim. All fixed LaTeX lives in the constants below.

use crate::models::resume::{
    EducationEntry, ExperienceEntry, LeadershipEntry, ProjectEntry, ResumeRecord, SkillSet,
};

// ────────────────────────────────────────────────────────────────────────────
// Fixed template text
// ────────────────────────────────────────────────────────────────────────────

/// Document class, packages, page geometry and the resume macros.
pub const PREAMBLE: &str = r"\documentclass[letterpaper,11pt]{article}
\usepackage{latexsym}
\usepackage[empty]{fullpage}
\usepackage{titlesec}
\usepackage{marvosym}
\usepackage[usenames,dvipsnames]{color}
\usepackage{enumitem}
\usepackage[hidelinks]{hyperref}
\usepackage{fancyhdr}
\usepackage[english]{babel}
\usepackage{tabularx}
\input{glyphtounicode}
\pagestyle{fancy}
\fancyhf{}
\renewcommand{\headrulewidth}{0pt}
\renewcommand{\footrulewidth}{0pt}
\addtolength{\oddsidemargin}{-0.5in}
\addtolength{\evensidemargin}{-0.5in}
\addtolength{\textwidth}{1in}
\addtolength{\topmargin}{-.5in}
\addtolength{\textheight}{1.0in}
\urlstyle{same}
\raggedbottom
\raggedright
\setlength{\tabcolsep}{0in}
\titleformat{\section}{\vspace{-4pt}\scshape\raggedright\large}{}{0em}{}[\color{black}\titlerule \vspace{-5pt}]
\pdfgentounicode=1
\newcommand{\resumeItem}[1]{\item\small{#1}}
\newcommand{\resumeSubheading}[4]{\vspace{-2pt}\item\begin{tabular*}{0.97\textwidth}[t]{l@{\extracolsep{\fill}}r}\textbf{#1} & #2 \\\textit{\small#3} & \textit{\small#4}\end{tabular*}\vspace{-7pt}}
\newcommand{\resumeSubHeadingListStart}{\begin{itemize}[leftmargin=0.15in,label={}]}
\newcommand{\resumeSubHeadingListEnd}{\end{itemize}}
\newcommand{\resumeItemListStart}{\begin{itemize}[noitemsep,topsep=0pt]}
\newcommand{\resumeItemListEnd}{\end{itemize}\vspace{-5pt}}";

pub const BEGIN_DOCUMENT: &str = r"\begin{document}";
pub const END_DOCUMENT: &str = r"\end{document}";
pub const BEGIN_HEADER: &str = r"\begin{center}";
pub const END_HEADER: &str = r"\end{center}";
pub const SUBHEADING_LIST_START: &str = r"\resumeSubHeadingListStart";
pub const SUBHEADING_LIST_END: &str = r"\resumeSubHeadingListEnd";
pub const ITEM_LIST_START: &str = r"\resumeItemListStart";
pub const ITEM_LIST_END: &str = r"\resumeItemListEnd";
/// Separator between contact details on the header line.
pub const CONTACT_SEPARATOR: &str = r" $|$ ";

pub const EDUCATION_TITLE: &str = "Education";
pub const EXPERIENCE_TITLE: &str = "Experience";
pub const PROJECTS_TITLE: &str = "Projects";
pub const SKILLS_TITLE: &str = "Technical Skills";
pub const LEADERSHIP_TITLE: &str = "Leadership";

// ────────────────────────────────────────────────────────────────────────────
// Macro invocations
// ────────────────────────────────────────────────────────────────────────────

fn section(title: &str) -> String {
    format!(r"\section{{{title}}}")
}

fn subheading(top_left: &str, top_right: &str, bottom_left: &str, bottom_right: &str) -> String {
    format!(r"\resumeSubheading{{{top_left}}}{{{top_right}}}{{{bottom_left}}}{{{bottom_right}}}")
}

fn item(text: &str) -> String {
    format!(r"\resumeItem{{{text}}}")
}

fn link(target: &str, label: &str) -> String {
    format!(r"\href{{{target}}}{{\underline{{{label}}}}}")
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

/// Renders a complete LaTeX document for `record`.
///
/// Education, Experience, Projects and Leadership are emitted only when non-empty;
/// Technical Skills is always emitted.
pub fn render(record: &ResumeRecord) -> String {
    let mut lines: Vec<String> = vec![PREAMBLE.to_string(), BEGIN_DOCUMENT.to_string()];

    render_header(record, &mut lines);

    if !record.education.is_empty() {
        render_entries(EDUCATION_TITLE, &record.education, &mut lines, render_education);
    }
    if !record.experience.is_empty() {
        render_entries(EXPERIENCE_TITLE, &record.experience, &mut lines, render_experience);
    }
    if !record.projects.is_empty() {
        render_entries(PROJECTS_TITLE, &record.projects, &mut lines, render_project);
    }
    render_skills(&record.skills, &mut lines);
    if !record.leadership.is_empty() {
        render_entries(LEADERSHIP_TITLE, &record.leadership, &mut lines, render_leadership);
    }

    lines.push(END_DOCUMENT.to_string());
    lines.join("\n")
}

fn render_header(record: &ResumeRecord, lines: &mut Vec<String>) {
    lines.push(BEGIN_HEADER.to_string());
    lines.push(format!(
        r"\textbf{{\Huge\scshape {}}}\\\vspace{{1pt}}",
        record.name
    ));

    let mut contact: Vec<String> = Vec::new();
    if !record.phone.is_empty() {
        contact.push(record.phone.clone());
    }
    if !record.email.is_empty() {
        contact.push(link(&format!("mailto:{}", record.email), &record.email));
    }
    if !record.linkedin.is_empty() {
        contact.push(link(&record.linkedin, &record.linkedin));
    }
    if !record.github.is_empty() {
        contact.push(link(&record.github, &record.github));
    }
    lines.push(format!(r"\small {}", contact.join(CONTACT_SEPARATOR)));

    lines.push(END_HEADER.to_string());
}

fn render_entries<T>(
    title: &str,
    entries: &[T],
    lines: &mut Vec<String>,
    render_entry: fn(&T, &mut Vec<String>),
) {
    lines.push(section(title));
    lines.push(SUBHEADING_LIST_START.to_string());
    for entry in entries {
        render_entry(entry, lines);
    }
    lines.push(SUBHEADING_LIST_END.to_string());
}

fn render_points(points: &[String], lines: &mut Vec<String>) {
    lines.push(ITEM_LIST_START.to_string());
    lines.extend(points.iter().map(|p| item(p)));
    lines.push(ITEM_LIST_END.to_string());
}

fn render_education(entry: &EducationEntry, lines: &mut Vec<String>) {
    lines.push(subheading(
        &entry.school,
        &entry.location,
        &entry.degree,
        &entry.dates,
    ));
}

fn render_experience(entry: &ExperienceEntry, lines: &mut Vec<String>) {
    lines.push(subheading(
        &entry.title,
        &entry.dates,
        &entry.company,
        &entry.location,
    ));
    render_points(&entry.points, lines);
}

fn render_project(entry: &ProjectEntry, lines: &mut Vec<String>) {
    lines.push(subheading(&entry.name, &entry.dates, &entry.tech, ""));
    render_points(&entry.points, lines);
}

fn render_leadership(entry: &LeadershipEntry, lines: &mut Vec<String>) {
    lines.push(subheading(&entry.title, &entry.dates, &entry.organization, ""));
    render_points(&entry.points, lines);
}

fn render_skills(skills: &SkillSet, lines: &mut Vec<String>) {
    lines.push(section(SKILLS_TITLE));
    lines.push(SUBHEADING_LIST_START.to_string());
    for (label, value) in [
        ("Languages", &skills.languages),
        ("Frameworks", &skills.frameworks),
        ("Developer Tools", &skills.tools),
        ("Libraries", &skills.libraries),
    ] {
        lines.push(item(&format!(r"\textbf{{{label}}}: {value}")));
    }
    lines.push(SUBHEADING_LIST_END.to_string());
}
