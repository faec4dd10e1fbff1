//! The geocoding service seam.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::GeocoderResult;

/// A place resolved by a geocoding service.
#[derive(Debug, Clone)]
pub struct Place {
    /// Human-readable address, most specific component first
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Opaque provider payload
    pub raw: Value,
}

/// Resolver from a free-text query to a single best place.
///
/// Returns `Ok(None)` when the service has no match. Implementations raise
/// [`GeocodeError`](crate::error::GeocodeError) for timeout, unavailable,
/// and generic service failures; the gateway catches every class.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, query: &str) -> GeocoderResult<Option<Place>>;
}
