//! Image classifier adapter
//!
//! Wraps a pre-trained image model behind [`ImageClassifier`]: one image in,
//! the top label and its probability out.

mod fake;
mod preprocess;
mod tract;

pub use fake::FakeClassifier;
pub use preprocess::prepare_input;
pub use tract::TractClassifier;

use crate::error::{FundError, Result};
use image::DynamicImage;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub confidence: f64,
}

pub trait ImageClassifier {
    fn classify(&self, image: &DynamicImage) -> Result<Prediction>;

    /// Labels in model output order
    fn labels(&self) -> &[String];
}

/// Read the newline-delimited label file.
pub fn load_labels(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(fundbuero_common::parse_label_list(&content)?)
}

/// Argmax over one output vector. Ties go to the lowest index.
pub fn top_prediction(scores: &[f32], labels: &[String]) -> Result<Prediction> {
    if scores.len() < labels.len() {
        return Err(FundError::Inference(format!(
            "Modell liefert {} Werte, aber es gibt {} Labels",
            scores.len(),
            labels.len()
        )));
    }

    let (index, score) = scores
        .iter()
        .take(labels.len())
        .enumerate()
        .filter(|(_, s)| !s.is_nan())
        .fold(None, |best: Option<(usize, f32)>, (i, &s)| match best {
            Some((_, b)) if b >= s => best,
            _ => Some((i, s)),
        })
        .ok_or_else(|| FundError::Inference("keine gültigen Ausgabewerte".into()))?;

    Ok(Prediction {
        label: labels[index].clone(),
        confidence: f64::from(score.clamp(0.0, 1.0)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec!["flasche".into(), "stift".into(), "brotdose".into()]
    }

    #[test]
    fn test_top_prediction_picks_max() {
        let p = top_prediction(&[0.1, 0.7, 0.2], &labels()).unwrap();
        assert_eq!(p.label, "stift");
        assert!((p.confidence - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_top_prediction_tie_lowest_index() {
        let p = top_prediction(&[0.4, 0.4, 0.2], &labels()).unwrap();
        assert_eq!(p.label, "flasche");
    }

    #[test]
    fn test_top_prediction_skips_nan() {
        let p = top_prediction(&[f32::NAN, 0.1, 0.3], &labels()).unwrap();
        assert_eq!(p.label, "brotdose");
    }

    #[test]
    fn test_top_prediction_ignores_extra_outputs() {
        let p = top_prediction(&[0.1, 0.2, 0.3, 0.9], &labels()).unwrap();
        assert_eq!(p.label, "brotdose");
    }

    #[test]
    fn test_top_prediction_short_output() {
        let err = top_prediction(&[0.5, 0.5], &labels()).unwrap_err();
        assert!(matches!(err, FundError::Inference(_)));
    }

    #[test]
    fn test_top_prediction_confidence_in_unit_range() {
        let p = top_prediction(&[2.5, -1.0, 0.0], &labels()).unwrap();
        assert_eq!(p.confidence, 1.0);
    }

    #[test]
    fn test_load_labels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.txt");
        std::fs::write(&path, "Flasche\nStift\nBrotdose\n").unwrap();
        assert_eq!(load_labels(&path).unwrap(), labels());
    }
}
