use super::{top_prediction, ImageClassifier, Prediction};
use crate::error::Result;
use image::DynamicImage;

/// Classifier that ignores the image and always reports one label.
///
/// Goes through the same argmax path as the real model.
pub struct FakeClassifier {
    labels: Vec<String>,
    scores: Vec<f32>,
}

impl FakeClassifier {
    pub fn new(labels: Vec<String>, label: &str, confidence: f32) -> Self {
        let scores = labels
            .iter()
            .map(|l| if fundbuero_common::labels_match(l, label) { confidence } else { 0.0 })
            .collect();
        Self { labels, scores }
    }
}

impl ImageClassifier for FakeClassifier {
    fn classify(&self, _image: &DynamicImage) -> Result<Prediction> {
        tracing::debug!("classifying with fake classifier");
        top_prediction(&self.scores, &self.labels)
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_reports_configured_label() {
        let labels = vec!["flasche".to_string(), "stift".to_string(), "brotdose".to_string()];
        let classifier = FakeClassifier::new(labels, "Stift", 0.82);
        let image = DynamicImage::new_rgb8(4, 4);

        let p = classifier.classify(&image).unwrap();
        assert_eq!(p.label, "stift");
        assert!((p.confidence - 0.82).abs() < 1e-6);
        assert!(classifier.labels().contains(&p.label));
    }
}
