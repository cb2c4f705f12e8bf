use crate::error::{FundError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const MODEL_FILE: &str = "keras_modell.onnx";
pub const LABEL_FILE: &str = "labels.txt";
pub const DATA_FILE: &str = "data.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the other file names are resolved against
    pub base_dir: PathBuf,
    pub model_file: String,
    pub label_file: String,
    pub data_file: String,
    /// Square input edge the model expects
    pub input_size: u32,
    /// Command that writes one encoded still image to stdout, e.g.
    /// `["libcamera-still", "-n", "-o", "-"]`
    pub camera_command: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            model_file: MODEL_FILE.into(),
            label_file: LABEL_FILE.into(),
            data_file: DATA_FILE.into(),
            input_size: 224,
            camera_command: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Read a config file; a missing file yields the defaults.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FundError::Config("Home-Verzeichnis nicht gefunden".into()))?;
        Ok(home.join(".config").join("fundbuero").join("config.json"))
    }

    pub fn model_path(&self) -> PathBuf {
        self.base_dir.join(&self.model_file)
    }

    pub fn label_path(&self) -> PathBuf {
        self.base_dir.join(&self.label_file)
    }

    pub fn data_path(&self) -> PathBuf {
        self.base_dir.join(&self.data_file)
    }

    fn validate(&self) -> Result<()> {
        if self.input_size == 0 {
            return Err(FundError::Config("input_size muss größer als 0 sein".into()));
        }
        if let Some(cmd) = &self.camera_command {
            if cmd.is_empty() {
                return Err(FundError::Config("camera_command ist leer".into()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.model_path(), PathBuf::from("./keras_modell.onnx"));
        assert_eq!(config.label_path(), PathBuf::from("./labels.txt"));
        assert_eq!(config.data_path(), PathBuf::from("./data.json"));
        assert_eq!(config.input_size, 224);
        assert!(config.camera_command.is_none());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/fundbuero/config.json")).unwrap();
        assert_eq!(config.model_file, MODEL_FILE);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"base_dir": "/srv/fundbuero", "input_size": 160}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.input_size, 160);
        assert_eq!(config.data_path(), PathBuf::from("/srv/fundbuero/data.json"));
        assert_eq!(config.label_file, LABEL_FILE);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            camera_command: Some(vec!["fswebcam".into(), "-".into()]),
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.camera_command, config.camera_command);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"input_size": 0}"#).unwrap();
        assert!(matches!(Config::load_from(&path), Err(FundError::Config(_))));

        std::fs::write(&path, r#"{"camera_command": []}"#).unwrap();
        assert!(matches!(Config::load_from(&path), Err(FundError::Config(_))));
    }
}
