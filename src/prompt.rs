//! Interactive prompts for fields missing from the command line

use crate::capture::{parse_date, today, CaptureForm};
use crate::error::{FundError, Result};
use dialoguer::{Confirm, Input};

/// Fill the capture form, asking only for what was not given as a flag.
pub fn complete_form(
    description: Option<String>,
    location: Option<String>,
    date: Option<String>,
) -> Result<CaptureForm> {
    let description = match description {
        Some(d) => d,
        None => prompt_text("Kurze Beschreibung")?,
    };
    let location = match location {
        Some(l) => l,
        None => prompt_text("Fundort")?,
    };
    let found_date = match date {
        Some(d) => parse_date(&d)?,
        None => today(),
    };

    Ok(CaptureForm {
        description,
        location,
        found_date,
    })
}

fn prompt_text(prompt: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| FundError::Prompt(e.to_string()))
}

pub fn confirm_save() -> Result<bool> {
    Confirm::new()
        .with_prompt("Fund speichern?")
        .default(true)
        .interact()
        .map_err(|e| FundError::Prompt(e.to_string()))
}
