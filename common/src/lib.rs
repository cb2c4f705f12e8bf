//! Fundbuero Common Library
//!
//! Types and policies shared by the CLI and the desktop front end.

pub mod types;
pub mod label;
pub mod error;

pub use types::{FoundItemRecord, records_from_json, records_to_json};
pub use label::{format_confidence, labels_match, normalize_label, parse_label_list};
pub use error::{Error, Result};
