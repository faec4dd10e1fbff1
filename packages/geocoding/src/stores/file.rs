//! JSON-file cache storage.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{CacheError, CacheResult};
use crate::traits::CacheStorage;
use crate::types::GeocodeResult;

/// Stores the whole mapping as one flat JSON object on disk.
///
/// The format is what the rest of the platform reads back: a string-keyed
/// object of geocode results, no versioning, no schema enforcement.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CacheStorage for JsonFileStorage {
    async fn load(&self) -> CacheResult<HashMap<String, GeocodeResult>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(CacheError::Deserialize),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(CacheError::Io(e)),
        }
    }

    async fn persist(&self, entries: &HashMap<String, GeocodeResult>) -> CacheResult<()> {
        let bytes = serde_json::to_vec(entries).map_err(CacheError::Serialize)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}
