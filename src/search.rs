//! Search flow
//!
//! Records are re-read on every search and filtered by label under the
//! shared label policy (trimmed, case-insensitive).

use crate::error::Result;
use crate::store::RecordStore;
use fundbuero_common::{format_confidence, labels_match, FoundItemRecord};
use std::collections::HashSet;
use std::path::PathBuf;

pub const NOT_FOUND_MESSAGE: &str = "❌ Kein passender Fund gefunden.";

/// Labels the user can pick from: the loaded label list in file order,
/// repeated lines shown once.
pub fn label_choices(labels: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    labels
        .iter()
        .filter(|label| seen.insert(label.as_str()))
        .cloned()
        .collect()
}

/// One matching record, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub record: FoundItemRecord,
    pub image_path: PathBuf,
}

impl SearchHit {
    pub fn confidence_text(&self) -> String {
        format_confidence(self.record.confidence)
    }

    /// `(caption, value)` rows shown under the photo.
    pub fn detail_rows(&self) -> [(&'static str, String); 4] {
        [
            ("Beschreibung", self.record.description.clone()),
            ("Fundort", self.record.location.clone()),
            ("Datum", self.record.found_date.clone()),
            ("KI-Sicherheit", self.confidence_text()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub query: String,
    pub hits: Vec<SearchHit>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }
}

/// Records whose label matches `label`, in stored order.
pub fn filter_by_label<'a>(records: &'a [FoundItemRecord], label: &str) -> Vec<&'a FoundItemRecord> {
    records.iter().filter(|r| labels_match(&r.label, label)).collect()
}

pub fn search(store: &RecordStore, label: &str) -> Result<SearchOutcome> {
    let records = store.load_all()?;
    let hits: Vec<SearchHit> = filter_by_label(&records, label)
        .into_iter()
        .map(|record| SearchHit {
            image_path: store.image_path(&record.image),
            record: record.clone(),
        })
        .collect();

    tracing::debug!(query = label, total = records.len(), hits = hits.len(), "search");
    Ok(SearchOutcome {
        query: label.to_string(),
        hits,
    })
}
