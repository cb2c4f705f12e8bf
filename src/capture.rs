//! Capture flow
//!
//! `ChoosingSource -> Acquired -> Saved`. Every user action maps to one
//! handler on [`CaptureSession`]; the prediction is computed once per image.

use crate::classifier::{ImageClassifier, Prediction};
use crate::error::{FundError, Result};
use crate::store::RecordStore;
use chrono::NaiveDate;
use fundbuero_common::{normalize_label, FoundItemRecord};
use image::{DynamicImage, ImageFormat};
use std::path::Path;
use std::process::Command;

const UPLOAD_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSource {
    Camera,
    #[default]
    Upload,
}

impl ImageSource {
    pub fn label(&self) -> &'static str {
        match self {
            ImageSource::Camera => "📷 Kamera verwenden",
            ImageSource::Upload => "📁 Bild hochladen",
        }
    }
}

/// The three fields the user fills in before saving.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureForm {
    pub description: String,
    pub location: String,
    pub found_date: NaiveDate,
}

impl Default for CaptureForm {
    fn default() -> Self {
        Self {
            description: String::new(),
            location: String::new(),
            found_date: today(),
        }
    }
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse `YYYY-MM-DD`.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| FundError::InvalidDate(value.to_string()))
}

#[derive(Debug, Clone, Default)]
pub enum CaptureState {
    #[default]
    ChoosingSource,
    Acquired {
        image: DynamicImage,
        prediction: Prediction,
    },
    Saved(FoundItemRecord),
}

#[derive(Debug, Default)]
pub struct CaptureSession {
    source: ImageSource,
    state: CaptureState,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> ImageSource {
        self.source
    }

    pub fn state(&self) -> &CaptureState {
        &self.state
    }

    pub fn image(&self) -> Option<&DynamicImage> {
        match &self.state {
            CaptureState::Acquired { image, .. } => Some(image),
            _ => None,
        }
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match &self.state {
            CaptureState::Acquired { prediction, .. } => Some(prediction),
            _ => None,
        }
    }

    /// Switching to another source drops the held image.
    pub fn select_source(&mut self, source: ImageSource) {
        if self.source != source {
            self.source = source;
            self.state = CaptureState::ChoosingSource;
        }
    }

    /// Hold `image`, replacing any previous one, and classify it once.
    pub fn acquire(
        &mut self,
        image: DynamicImage,
        classifier: &dyn ImageClassifier,
    ) -> Result<Prediction> {
        let prediction = classifier.classify(&image)?;
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            label = %prediction.label,
            "image acquired"
        );
        self.state = CaptureState::Acquired {
            image,
            prediction: prediction.clone(),
        };
        Ok(prediction)
    }

    pub fn acquire_bytes(
        &mut self,
        bytes: &[u8],
        classifier: &dyn ImageClassifier,
    ) -> Result<Prediction> {
        let image =
            image::load_from_memory(bytes).map_err(|e| FundError::ImageDecode(e.to_string()))?;
        self.acquire(image, classifier)
    }

    /// Uploaded file; only jpg, jpeg and png are accepted.
    pub fn acquire_file(
        &mut self,
        path: &Path,
        classifier: &dyn ImageClassifier,
    ) -> Result<Prediction> {
        let supported = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| UPLOAD_EXTENSIONS.contains(&ext.as_str()));
        if !supported {
            return Err(FundError::ImageDecode(format!(
                "{} (erlaubt: jpg, jpeg, png)",
                path.display()
            )));
        }

        let bytes = std::fs::read(path)?;
        self.acquire_bytes(&bytes, classifier)
    }

    /// Run the configured capture command and take the still it prints.
    pub fn capture_from_camera(
        &mut self,
        command: Option<&[String]>,
        classifier: &dyn ImageClassifier,
    ) -> Result<Prediction> {
        let Some((program, args)) = command.and_then(|c| c.split_first()) else {
            return Err(FundError::CameraUnavailable);
        };

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| FundError::CameraCapture(format!("{}: {}", program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FundError::CameraCapture(format!(
                "{} (code {:?}): {}",
                program,
                output.status.code(),
                stderr.trim()
            )));
        }

        self.acquire_bytes(&output.stdout, classifier)
    }

    /// Store the held image and append its record.
    ///
    /// The photo is written first; if the data file write fails afterwards the
    /// photo stays on disk without a record.
    pub fn save(&mut self, form: &CaptureForm, store: &RecordStore) -> Result<FoundItemRecord> {
        let CaptureState::Acquired { image, prediction } = &self.state else {
            return Err(FundError::NoImage);
        };

        let mut records = store.load_all()?;
        let image_name = RecordStore::next_image_name(records.len());
        let image_path = store.image_path(&image_name);

        DynamicImage::ImageRgb8(image.to_rgb8())
            .save_with_format(&image_path, ImageFormat::Jpeg)
            .map_err(|e| FundError::ImageSave(format!("{}: {}", image_path.display(), e)))?;

        let record = FoundItemRecord {
            label: normalize_label(&prediction.label),
            confidence: prediction.confidence,
            description: form.description.clone(),
            location: form.location.clone(),
            found_date: form.found_date.format("%Y-%m-%d").to_string(),
            image: image_name,
        };
        records.push(record.clone());
        store.save_all(&records)?;

        tracing::info!(label = %record.label, image = %record.image, "found item saved");
        self.state = CaptureState::Saved(record.clone());
        Ok(record)
    }

    /// Back to an empty session, keeping the chosen source.
    pub fn reset(&mut self) {
        self.state = CaptureState::ChoosingSource;
    }
}
