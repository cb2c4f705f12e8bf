//! Application context, built once at process start.

use crate::classifier::{load_labels, ImageClassifier, TractClassifier};
use crate::config::Config;
use crate::error::{FundError, Result};
use crate::store::RecordStore;

pub struct App {
    pub config: Config,
    pub classifier: Box<dyn ImageClassifier>,
    pub store: RecordStore,
}

impl App {
    /// Context around an already constructed classifier.
    pub fn with_classifier(config: Config, classifier: Box<dyn ImageClassifier>) -> Self {
        let store = RecordStore::new(config.data_path());
        Self {
            config,
            classifier,
            store,
        }
    }

    pub fn labels(&self) -> &[String] {
        self.classifier.labels()
    }
}

/// Check the model and label files, then load both.
///
/// A missing model or label file is fatal; the caller reports the error once
/// and stops.
pub fn bootstrap(config: &Config) -> Result<App> {
    let model_path = config.model_path();
    if !model_path.exists() {
        return Err(FundError::ModelMissing(config.model_file.clone()));
    }

    let label_path = config.label_path();
    if !label_path.exists() {
        return Err(FundError::LabelsMissing(config.label_file.clone()));
    }

    let labels = load_labels(&label_path)?;
    let classifier = TractClassifier::load(&model_path, labels, config.input_size)?;

    tracing::info!(
        model = %model_path.display(),
        labels = ?classifier.labels(),
        "📦 Modell geladen"
    );

    Ok(App::with_classifier(config.clone(), Box::new(classifier)))
}
