use super::SavedStore;
use crate::error::{Result, StudzError};
use crate::model::SavedItem;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the persisted blob, kept from the original storage key.
const SAVED_FILE: &str = "savedItems.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn blob_path(&self) -> PathBuf {
        self.root.join(SAVED_FILE)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(StudzError::Io)?;
        }
        Ok(())
    }
}

impl SavedStore for FileStore {
    fn load(&self) -> Result<Vec<SavedItem>> {
        let path = self.blob_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(StudzError::Io)?;
        let items: Vec<SavedItem> =
            serde_json::from_str(&content).map_err(StudzError::Serialization)?;
        Ok(items)
    }

    fn save(&mut self, items: &[SavedItem]) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(items).map_err(StudzError::Serialization)?;
        fs::write(self.blob_path(), content).map_err(StudzError::Io)?;
        Ok(())
    }
}
