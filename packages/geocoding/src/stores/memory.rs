//! In-memory cache storage for testing and development.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::CacheResult;
use crate::traits::CacheStorage;
use crate::types::GeocodeResult;

/// Holds the persisted mapping in memory and counts persist calls.
///
/// Useful for asserting on flush behavior. Not durable: data is lost when
/// the storage is dropped.
#[derive(Default)]
pub struct MemoryStorage {
    persisted: RwLock<HashMap<String, GeocodeResult>>,
    persist_count: AtomicUsize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the backing mapping.
    pub fn with_entries(self, entries: HashMap<String, GeocodeResult>) -> Self {
        *self.persisted.write().unwrap() = entries;
        self
    }

    /// Number of times `persist` ran.
    pub fn persist_count(&self) -> usize {
        self.persist_count.load(Ordering::Relaxed)
    }

    /// Snapshot of the most recently persisted mapping.
    pub fn persisted(&self) -> HashMap<String, GeocodeResult> {
        self.persisted.read().unwrap().clone()
    }
}

#[async_trait]
impl CacheStorage for MemoryStorage {
    async fn load(&self) -> CacheResult<HashMap<String, GeocodeResult>> {
        Ok(self.persisted.read().unwrap().clone())
    }

    async fn persist(&self, entries: &HashMap<String, GeocodeResult>) -> CacheResult<()> {
        *self.persisted.write().unwrap() = entries.clone();
        self.persist_count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_persist_counts_and_replaces() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.persist_count(), 0);

        let mut entries = HashMap::new();
        entries.insert(
            "Tokyo".to_string(),
            GeocodeResult {
                input: "Tokyo".to_string(),
                address: "Tokyo, Japan".to_string(),
                latitude: 35.6762,
                longitude: 139.6503,
                raw: json!({}),
            },
        );

        storage.persist(&entries).await.unwrap();
        storage.persist(&HashMap::new()).await.unwrap();

        assert_eq!(storage.persist_count(), 2);
        assert!(storage.persisted().is_empty());
    }
}
