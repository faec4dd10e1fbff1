//! Nominatim-backed geocoder.

use async_trait::async_trait;
use nominatim_client::{NominatimClient, NominatimError};

use crate::error::{GeocodeError, GeocoderResult};
use crate::traits::{Geocoder, Place};

/// Adapts [`NominatimClient`] to the [`Geocoder`] seam.
pub struct NominatimGeocoder {
    client: NominatimClient,
}

impl NominatimGeocoder {
    /// Create a geocoder identifying itself with the given User-Agent.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            client: NominatimClient::new(user_agent),
        }
    }

    /// Wrap an already-configured client.
    pub fn with_client(client: NominatimClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, query: &str) -> GeocoderResult<Option<Place>> {
        let hit = self.client.search_one(query).await.map_err(map_error)?;

        Ok(hit.map(|hit| Place {
            address: hit.display_name,
            latitude: hit.latitude,
            longitude: hit.longitude,
            raw: hit.raw,
        }))
    }
}

fn map_error(e: NominatimError) -> GeocodeError {
    match e {
        NominatimError::Timeout { query } => GeocodeError::Timeout { query },
        NominatimError::Unavailable { .. } => GeocodeError::Unavailable,
        other => GeocodeError::Service(Box::new(other)),
    }
}
