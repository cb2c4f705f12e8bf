//! Label policy
//!
//! Labels are compared trimmed and lowercased everywhere: when the label file
//! is read, when a record is stored and when a search query is matched.

use crate::error::{Error, Result};

/// Trim surrounding whitespace and lowercase.
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

pub fn labels_match(a: &str, b: &str) -> bool {
    normalize_label(a) == normalize_label(b)
}

/// Parse a newline-delimited label file. Blank lines are skipped.
pub fn parse_label_list(content: &str) -> Result<Vec<String>> {
    let labels: Vec<String> = content
        .lines()
        .map(normalize_label)
        .filter(|l| !l.is_empty())
        .collect();

    if labels.is_empty() {
        return Err(Error::EmptyLabels);
    }
    Ok(labels)
}

/// Confidence as a percentage with one decimal, e.g. `87.5%`.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}
