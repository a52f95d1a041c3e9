use crate::error::Error;
use crate::Result;

/// Derive a valid Python package identifier from a human-readable project name.
///
/// Lowercases, replaces every character outside `[a-z0-9_]` with `_`, and
/// prefixes `_` when the name starts with a digit. Every character of the
/// input maps to exactly one output character, so any non-empty name yields
/// a non-empty identifier matching `^[a-z_][a-z0-9_]*$`.
pub fn package_name(project_name: &str) -> Result<String> {
    if project_name.is_empty() {
        return Err(Error::InvalidProjectName(
            "Project name cannot be empty".to_string(),
        ));
    }

    let mut out = String::with_capacity(project_name.len() + 1);

    for ch in project_name.chars() {
        let normalized = match ch {
            'a'..='z' | '0'..='9' | '_' => ch,
            'A'..='Z' => ch.to_ascii_lowercase(),
            _ => '_',
        };

        if out.is_empty() && normalized.is_ascii_digit() {
            out.push('_');
        }
        out.push(normalized);
    }

    Ok(out)
}
