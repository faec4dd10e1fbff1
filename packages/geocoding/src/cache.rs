//! The location cache: a durable, in-memory-backed string -> result mapping.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use crate::error::CacheResult;
use crate::traits::CacheStorage;
use crate::types::GeocodeResult;

/// In-memory cache of geocoded locations over a durable backend.
///
/// Loaded once at startup, mutated in memory during a run, flushed
/// periodically and at batch boundaries. Entries are never invalidated; a
/// manual insert is the only supported overwrite path. Losing unflushed
/// entries on a crash is accepted.
pub struct LocationCache {
    entries: RwLock<HashMap<String, GeocodeResult>>,
    storage: Arc<dyn CacheStorage>,
}

impl LocationCache {
    /// Load the cache from storage.
    ///
    /// Missing or corrupt storage yields an empty cache with a warning,
    /// never an error.
    pub async fn load(storage: Arc<dyn CacheStorage>) -> Self {
        let entries = match storage.load().await {
            Ok(entries) => {
                debug!(count = entries.len(), "Loaded location cache");
                entries
            }
            Err(e) => {
                warn!(error = %e, "Failed to load location cache, starting empty");
                HashMap::new()
            }
        };

        Self {
            entries: RwLock::new(entries),
            storage,
        }
    }

    /// Create an empty cache without touching storage.
    pub fn empty(storage: Arc<dyn CacheStorage>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            storage,
        }
    }

    /// Exact-match lookup.
    pub fn get(&self, key: &str) -> Option<GeocodeResult> {
        self.entries.read().unwrap().get(key).cloned()
    }

    /// Upsert; fully replaces any existing value.
    pub fn put(&self, key: impl Into<String>, value: GeocodeResult) {
        self.entries.write().unwrap().insert(key.into(), value);
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    /// Write the full mapping to storage, overwriting prior contents.
    ///
    /// Callers treat failures as non-fatal: the in-memory mapping stays
    /// usable for the rest of the run.
    pub async fn flush(&self) -> CacheResult<()> {
        let snapshot = self.entries.read().unwrap().clone();
        self.storage.persist(&snapshot).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::{JsonFileStorage, MemoryStorage};
    use serde_json::json;

    fn entry(input: &str) -> GeocodeResult {
        GeocodeResult {
            input: input.to_string(),
            address: format!("{}, Somewhere", input),
            latitude: 1.0,
            longitude: 2.0,
            raw: json!({}),
        }
    }

    #[tokio::test]
    async fn test_load_from_prepopulated_storage() {
        let mut persisted = HashMap::new();
        persisted.insert("London".to_string(), entry("London"));
        let storage = Arc::new(MemoryStorage::new().with_entries(persisted));

        let cache = LocationCache::load(storage).await;
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("London").unwrap().input, "London");
    }

    #[tokio::test]
    async fn test_corrupt_storage_yields_empty_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(&path, "{ truncated").unwrap();

        let cache = LocationCache::load(Arc::new(JsonFileStorage::new(path))).await;
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_put_replaces_existing_value() {
        let cache = LocationCache::empty(Arc::new(MemoryStorage::new()));

        cache.put("London", entry("London"));
        let mut corrected = entry("London");
        corrected.latitude = 51.5074;
        cache.put("London", corrected);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("London").unwrap().latitude, 51.5074);
    }

    #[tokio::test]
    async fn test_flush_persists_whole_mapping() {
        let storage = Arc::new(MemoryStorage::new());
        let cache = LocationCache::empty(storage.clone());

        cache.put("London", entry("London"));
        cache.put("Paris", entry("Paris"));
        cache.flush().await.unwrap();

        assert_eq!(storage.persist_count(), 1);
        assert_eq!(storage.persisted().len(), 2);
    }

    #[tokio::test]
    async fn test_get_is_exact_match_only() {
        let cache = LocationCache::empty(Arc::new(MemoryStorage::new()));
        cache.put("London", entry("London"));

        assert!(cache.get("london").is_none());
        assert!(cache.get("London ").is_none());
    }
}
