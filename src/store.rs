//! Record store
//!
//! The whole record list lives in one JSON array that is read and rewritten
//! wholesale. Photos are stored next to it as `fund_<n>.jpg`.

use crate::error::Result;
use fundbuero_common::{records_from_json, records_to_json, FoundItemRecord};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct RecordStore {
    data_file: PathBuf,
    image_dir: PathBuf,
}

impl RecordStore {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        let data_file = data_file.into();
        let image_dir = data_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            data_file,
            image_dir,
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// All records in stored order; a missing file means no records yet.
    pub fn load_all(&self) -> Result<Vec<FoundItemRecord>> {
        if !self.data_file.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.data_file)?;
        let records = records_from_json(&content)?;
        tracing::debug!(path = %self.data_file.display(), count = records.len(), "records loaded");
        Ok(records)
    }

    /// Replace the data file with `records`.
    ///
    /// Written to a sibling temp file, fsynced, then renamed over the old
    /// file, so a crash leaves either the previous or the new content.
    pub fn save_all(&self, records: &[FoundItemRecord]) -> Result<()> {
        let json = records_to_json(records)?;

        if !self.image_dir.as_os_str().is_empty() {
            std::fs::create_dir_all(&self.image_dir)?;
        }
        let tmp_path = self.tmp_path();
        {
            let mut file = std::fs::File::create(&tmp_path)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
        }
        std::fs::rename(&tmp_path, &self.data_file)?;

        // best-effort, not every platform can open a directory
        if let Ok(dir) = std::fs::File::open(&self.image_dir) {
            let _ = dir.sync_all();
        }

        tracing::debug!(path = %self.data_file.display(), count = records.len(), "records saved");
        Ok(())
    }

    /// Load, push one record, save.
    pub fn append(&self, record: FoundItemRecord) -> Result<Vec<FoundItemRecord>> {
        let mut records = self.load_all()?;
        records.push(record);
        self.save_all(&records)?;
        Ok(records)
    }

    /// File name for the photo of the record saved at position `count`.
    pub fn next_image_name(count: usize) -> String {
        format!("fund_{}.jpg", count)
    }

    /// Where a stored image name lives on disk.
    pub fn image_path(&self, image_name: &str) -> PathBuf {
        self.image_dir.join(image_name)
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .data_file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "data.json".to_string());
        self.image_dir.join(format!(".{}.tmp", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_image_name() {
        assert_eq!(RecordStore::next_image_name(0), "fund_0.jpg");
        assert_eq!(RecordStore::next_image_name(12), "fund_12.jpg");
    }

    #[test]
    fn test_image_path_next_to_data_file() {
        let store = RecordStore::new("/srv/fundbuero/data.json");
        assert_eq!(store.image_path("fund_3.jpg"), PathBuf::from("/srv/fundbuero/fund_3.jpg"));
    }

    #[test]
    fn test_bare_file_name_uses_current_dir() {
        let store = RecordStore::new("data.json");
        assert_eq!(store.image_path("fund_0.jpg"), PathBuf::from("fund_0.jpg"));
        assert_eq!(store.tmp_path(), PathBuf::from(".data.json.tmp"));
    }
}
