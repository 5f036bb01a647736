use super::BlobStore;
use crate::error::{InnovationError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed blob store: each key lives in `<root>/<key>.json`.
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`.
    pub fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(InnovationError::Io)?;
        }
        Ok(())
    }
}

impl BlobStore for FsBlobStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let blob = fs::read_to_string(path).map_err(InnovationError::Io)?;
        Ok(Some(blob))
    }

    fn write(&self, key: &str, blob: &str) -> Result<()> {
        self.ensure_dir()?;

        // Write beside the target, then rename over it
        let tmp_file = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_file, blob).map_err(InnovationError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, self.blob_path(key)) {
            let _ = fs::remove_file(&tmp_file);
            return Err(InnovationError::Io(e));
        }
        tracing::debug!(key, bytes = blob.len(), "blob written");
        Ok(())
    }
}
