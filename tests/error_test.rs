//! Error case tests

use fundbuero::error::FundError;

#[test]
fn test_error_display() {
    let errors = vec![
        FundError::Config("Testfehler".to_string()),
        FundError::ModelMissing("keras_modell.onnx".to_string()),
        FundError::LabelsMissing("labels.txt".to_string()),
        FundError::ModelLoad("kaputt".to_string()),
        FundError::Inference("leer".to_string()),
        FundError::ImageDecode("foto.gif".to_string()),
        FundError::ImageSave("fund_0.jpg".to_string()),
        FundError::NoImage,
        FundError::CameraUnavailable,
        FundError::CameraCapture("libcamera-still".to_string()),
        FundError::Prompt("abgebrochen".to_string()),
        FundError::InvalidDate("gestern".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "empty error message: {:?}", err);
    }
}

/// Fatal startup messages name the missing file
#[test]
fn test_missing_file_messages() {
    let err = FundError::ModelMissing("keras_modell.onnx".to_string());
    assert_eq!(format!("{}", err), "❌ Modell-Datei fehlt: keras_modell.onnx");

    let err = FundError::LabelsMissing("labels.txt".to_string());
    assert!(format!("{}", err).contains("labels.txt"));
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: FundError = io_err.into();

    assert!(matches!(err, FundError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: FundError = json_err.into();

    assert!(matches!(err, FundError::Json(_)));
}

/// Common errors pass through unchanged
#[test]
fn test_common_error_transparent() {
    let err: FundError = fundbuero_common::Error::EmptyLabels.into();

    assert!(matches!(err, FundError::Common(_)));
    assert_eq!(format!("{}", err), "Label-Liste ist leer");
}
