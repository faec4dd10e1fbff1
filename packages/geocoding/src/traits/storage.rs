//! Durable storage seam for the location cache.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::CacheResult;
use crate::types::GeocodeResult;

/// Durable backend holding the entire cache mapping.
///
/// `persist` replaces prior contents with the full mapping; there is no
/// incremental write path. Last writer wins.
#[async_trait]
pub trait CacheStorage: Send + Sync {
    /// Read the stored mapping. A backend with nothing stored yet returns
    /// an empty mapping, not an error.
    async fn load(&self) -> CacheResult<HashMap<String, GeocodeResult>>;

    /// Replace the stored mapping with `entries`.
    async fn persist(&self, entries: &HashMap<String, GeocodeResult>) -> CacheResult<()>;
}
