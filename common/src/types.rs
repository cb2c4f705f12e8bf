//! Record types
//!
//! The on-disk key names (`beschreibung`, `fundort`, `funddatum`) are kept
//! so existing `data.json` files stay readable.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One found item as stored in the data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundItemRecord {
    pub label: String,

    pub confidence: f64,

    #[serde(rename = "beschreibung")]
    pub description: String,      // Beschreibung

    #[serde(rename = "fundort")]
    pub location: String,         // Fundort

    #[serde(rename = "funddatum")]
    pub found_date: String,       // YYYY-MM-DD

    /// File name of the stored photo, relative to the data directory
    pub image: String,
}

/// Parse a whole data file.
pub fn records_from_json(content: &str) -> Result<Vec<FoundItemRecord>> {
    Ok(serde_json::from_str(content)?)
}

/// Serialize records pretty-printed with two-space indentation.
pub fn records_to_json(records: &[FoundItemRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
