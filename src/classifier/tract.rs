use super::{prepare_input, top_prediction, ImageClassifier, Prediction};
use crate::error::{FundError, Result};
use image::DynamicImage;
use std::path::Path;
use tract_onnx::prelude::*;

/// ONNX model run on CPU through tract.
pub struct TractClassifier {
    model: TypedRunnableModel<TypedModel>,
    labels: Vec<String>,
    input_size: u32,
}

impl TractClassifier {
    pub fn load(model_path: &Path, labels: Vec<String>, input_size: u32) -> Result<Self> {
        let edge = input_size as usize;
        let model = tract_onnx::onnx()
            .model_for_path(model_path)
            .and_then(|m| m.with_input_fact(0, f32::fact([1, edge, edge, 3]).into()))
            .and_then(|m| m.into_optimized())
            .and_then(|m| m.into_runnable())
            .map_err(|e| FundError::ModelLoad(format!("{}: {}", model_path.display(), e)))?;

        tracing::debug!(
            model = %model_path.display(),
            labels = labels.len(),
            input_size,
            "model loaded"
        );

        Ok(Self {
            model,
            labels,
            input_size,
        })
    }
}

impl ImageClassifier for TractClassifier {
    fn classify(&self, image: &DynamicImage) -> Result<Prediction> {
        let input = prepare_input(image, self.input_size);

        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| FundError::Inference(e.to_string()))?;
        let output = outputs
            .first()
            .ok_or_else(|| FundError::Inference("Modell liefert keine Ausgabe".into()))?;
        let scores: Vec<f32> = output
            .to_array_view::<f32>()
            .map_err(|e| FundError::Inference(e.to_string()))?
            .iter()
            .copied()
            .collect();

        let prediction = top_prediction(&scores, &self.labels)?;
        tracing::debug!(label = %prediction.label, confidence = prediction.confidence, "classified");
        Ok(prediction)
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }
}
