use thiserror::Error;

#[derive(Error, Debug)]
pub enum FundError {
    #[error("Konfigurationsfehler: {0}")]
    Config(String),

    #[error("❌ Modell-Datei fehlt: {0}")]
    ModelMissing(String),

    #[error("❌ Label-Datei fehlt: {0}")]
    LabelsMissing(String),

    #[error("Modell konnte nicht geladen werden: {0}")]
    ModelLoad(String),

    #[error("Klassifizierung fehlgeschlagen: {0}")]
    Inference(String),

    #[error("Bild konnte nicht gelesen werden: {0}")]
    ImageDecode(String),

    #[error("Bild konnte nicht gespeichert werden: {0}")]
    ImageSave(String),

    #[error("Kein Bild ausgewählt")]
    NoImage,

    #[error("Keine Kamera konfiguriert (camera_command in der Konfiguration setzen)")]
    CameraUnavailable,

    #[error("Kameraaufnahme fehlgeschlagen: {0}")]
    CameraCapture(String),

    #[error("Eingabe abgebrochen: {0}")]
    Prompt(String),

    #[error("Ungültiges Datum: {0} (erwartet JJJJ-MM-TT)")]
    InvalidDate(String),

    #[error("JSON-Fehler: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO-Fehler: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] fundbuero_common::Error),
}

pub type Result<T> = std::result::Result<T, FundError>;
