//! Format string rendering.
//!
//! Rendering is a fixed pipeline: expand `{version+}`, substitute placeholders,
//! collapse separator runs left behind by empty fields, then drop trailing
//! separators.

use crate::version::VersionRecord;

pub const DEFAULT_FORMAT: &str = "{version+}";

const FULL_VERSION: &str = "{version+}";
const FULL_VERSION_EXPANSION: &str = "{version}-{prerelease}-{commits}-{timestamp}+{metadata}";

const SEPARATOR_RULES: [(&str, &str); 4] = [("--", "-"), ("++", "+"), ("-+", "+"), ("+-", "-")];

/// Expand the `{version+}` macro once. The expansion itself is not rescanned.
pub fn expand(format: &str) -> String {
    format.replace(FULL_VERSION, FULL_VERSION_EXPANSION)
}

/// Replace every placeholder with its field, empty fields becoming empty text.
pub fn substitute(record: &VersionRecord, format: &str) -> String {
    let version = record.version();
    let placeholders: [(&str, &str); 8] = [
        ("{major}", record.major.as_str()),
        ("{minor}", record.minor.as_str()),
        ("{patch}", record.patch.as_str()),
        ("{version}", version.as_str()),
        ("{prerelease}", record.prerelease.as_str()),
        ("{commits}", record.commits.as_str()),
        ("{timestamp}", record.timestamp.as_str()),
        ("{metadata}", record.metadata.as_str()),
    ];

    placeholders
        .into_iter()
        .fold(format.to_string(), |text, (placeholder, value)| text.replace(placeholder, value))
}

/// Collapse separator runs until nothing changes.
pub fn normalize(text: &str) -> String {
    let mut result = text.to_string();

    // Every productive pass removes at least one character.
    for _ in 0..=text.len() {
        let next = SEPARATOR_RULES
            .iter()
            .fold(result.clone(), |acc, (from, to)| acc.replace(from, to));
        if next == result {
            break;
        }
        result = next;
    }

    result
}

pub fn trim_trailing(text: &str) -> &str {
    text.trim_end_matches(['-', '+'])
}

/// Render `format` against `record`.
pub fn render(record: &VersionRecord, format: &str) -> String {
    let expanded = expand(format);
    let substituted = substitute(record, &expanded);
    let normalized = normalize(&substituted);
    trim_trailing(&normalized).to_string()
}
