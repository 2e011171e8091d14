// LaTeX output: escaping of user text and the resume document template.
// Both are pure; nothing here performs I/O or can fail.

pub mod escape;
pub mod template;
