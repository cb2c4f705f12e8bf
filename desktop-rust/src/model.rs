use chrono::{Datelike, NaiveDate};
use fundbuero::capture::{today, CaptureForm};
use fundbuero::search::SearchOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Capture,
    Search,
}

/// Input on the capture tab.
#[derive(Debug, Clone)]
pub struct CaptureFields {
    pub description: String,
    pub location: String,
    pub date: NaiveDate,
}

impl Default for CaptureFields {
    fn default() -> Self {
        Self {
            description: String::new(),
            location: String::new(),
            date: today(),
        }
    }
}

impl CaptureFields {
    pub fn to_form(&self) -> CaptureForm {
        CaptureForm {
            description: self.description.clone(),
            location: self.location.clone(),
            found_date: self.date,
        }
    }

    /// Set the date from picker parts. The day is clamped to the month length,
    /// so switching from 31 March to February lands on its last day.
    pub fn set_date(&mut self, year: i32, month: u32, day: u32) {
        let month = month.clamp(1, 12);
        let last_day = days_in_month(year, month);
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day.clamp(1, last_day)) {
            self.date = date;
        }
    }

    pub fn date_parts(&self) -> (i32, u32, u32) {
        (self.date.year(), self.date.month(), self.date.day())
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|&day| NaiveDate::from_ymd_opt(year, month, day).is_some())
        .unwrap_or(28)
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub selected: String,
    pub outcome: Option<SearchOutcome>,
    pub error: Option<String>,
}

pub struct ThumbData {
    pub path: String,
    pub size: [usize; 2],
    pub pixels: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_default_to_today() {
        let fields = CaptureFields::default();
        assert_eq!(fields.to_form().found_date, today());
    }

    #[test]
    fn test_set_date() {
        let mut fields = CaptureFields::default();
        fields.set_date(2024, 5, 1);
        assert_eq!(fields.to_form().found_date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(fields.date_parts(), (2024, 5, 1));
    }

    #[test]
    fn test_set_date_clamps_day_to_month() {
        let mut fields = CaptureFields::default();
        fields.set_date(2024, 2, 31);
        assert_eq!(fields.date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        fields.set_date(2023, 2, 31);
        assert_eq!(fields.date, NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
        fields.set_date(2024, 13, 0);
        assert_eq!(fields.date, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
    }
}
