//! Digitales Fundbüro
//!
//! Photograph a found item, let a pre-trained classifier suggest a label,
//! append the record to a JSON file and search records by label.

pub mod capture;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod prompt;
pub mod search;
pub mod startup;
pub mod store;

pub use fundbuero_common::FoundItemRecord;
