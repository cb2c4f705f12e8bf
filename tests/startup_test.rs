//! Startup tests
//!
//! Missing model or label files stop the application before anything else

use fundbuero::config::Config;
use fundbuero::error::FundError;
use fundbuero::startup::bootstrap;
use std::path::Path;
use tempfile::tempdir;

fn config_in(dir: &Path) -> Config {
    Config {
        base_dir: dir.to_path_buf(),
        ..Default::default()
    }
}

/// Model absent: one error naming the model file, even when labels are missing too
#[test]
fn test_missing_model_is_fatal() {
    let dir = tempdir().expect("Failed to create temp dir");

    let err = bootstrap(&config_in(dir.path())).err().expect("bootstrap must fail");
    assert!(matches!(err, FundError::ModelMissing(_)));

    let message = format!("{}", err);
    assert!(message.contains("keras_modell.onnx"));
    assert_eq!(message.lines().count(), 1);
    assert!(!dir.path().join("data.json").exists());
}

#[test]
fn test_missing_labels_is_fatal() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("keras_modell.onnx"), b"model").unwrap();

    let err = bootstrap(&config_in(dir.path())).err().expect("bootstrap must fail");
    assert!(matches!(err, FundError::LabelsMissing(ref name) if name == "labels.txt"));
}

#[test]
fn test_empty_label_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("keras_modell.onnx"), b"model").unwrap();
    std::fs::write(dir.path().join("labels.txt"), "\n\n").unwrap();

    let err = bootstrap(&config_in(dir.path())).err().expect("bootstrap must fail");
    assert!(matches!(err, FundError::Common(fundbuero_common::Error::EmptyLabels)));
}

#[test]
fn test_unreadable_model() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("keras_modell.onnx"), b"not an onnx model").unwrap();
    std::fs::write(dir.path().join("labels.txt"), "flasche\nstift\nbrotdose\n").unwrap();

    let err = bootstrap(&config_in(dir.path())).err().expect("bootstrap must fail");
    assert!(matches!(err, FundError::ModelLoad(_)));
}

/// Custom file names from the config are reported as configured
#[test]
fn test_custom_model_name() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config {
        model_file: "mobilenet_fund.onnx".to_string(),
        ..config_in(dir.path())
    };

    let err = bootstrap(&config).err().expect("bootstrap must fail");
    assert!(format!("{}", err).contains("mobilenet_fund.onnx"));
}
