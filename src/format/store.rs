//! Persistence backends.
//!
//! The editor treats storage as an opaque service that accepts and returns
//! the encoded region list.

use std::path::{Path, PathBuf};

use super::error::StoreError;

/// A save/load service for encoded region lists.
pub trait RegionStore {
    /// Persist an encoded region list, replacing any previous one.
    fn save(&mut self, payload: &str) -> Result<(), StoreError>;

    /// Fetch the most recently saved region list.
    fn load(&mut self) -> Result<String, StoreError>;
}

/// Stores the region list as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the default filename for saved regions.
    pub fn default_filename() -> &'static str {
        "regions.json"
    }
}

impl RegionStore for FileStore {
    fn save(&mut self, payload: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // The previous snapshot stays intact until the rename.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, payload)?;
        std::fs::rename(&tmp, &self.path)?;
        log::debug!("Wrote {} bytes to {:?}", payload.len(), self.path);
        Ok(())
    }

    fn load(&mut self) -> Result<String, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::NotFound {
                path: self.path.clone(),
            });
        }
        Ok(std::fs::read_to_string(&self.path)?)
    }
}

/// Keeps the last saved payload in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    payload: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with a payload.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
        }
    }
}

impl RegionStore for MemoryStore {
    fn save(&mut self, payload: &str) -> Result<(), StoreError> {
        self.payload = Some(payload.to_string());
        Ok(())
    }

    fn load(&mut self) -> Result<String, StoreError> {
        self.payload.clone().ok_or_else(|| StoreError::NotFound {
            path: PathBuf::from("<memory>"),
        })
    }
}
