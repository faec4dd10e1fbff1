//! Testing utilities including a mock geocoder.
//!
//! Useful for testing applications that use the pipeline without making
//! real network calls.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::json;

use crate::error::{GeocodeError, GeocoderResult};
use crate::traits::{Geocoder, Place};

/// How a [`MockGeocoder`] query should fail.
#[derive(Debug, Clone, Copy)]
pub enum MockFailure {
    Timeout,
    Unavailable,
    Service,
}

/// A mock geocoder with canned places and injectable failures.
///
/// Queries are matched exactly. Clones share state, so a clone kept outside
/// the gateway can assert on the calls it received.
#[derive(Clone, Default)]
pub struct MockGeocoder {
    places: Arc<RwLock<HashMap<String, Place>>>,
    failures: Arc<RwLock<HashMap<String, MockFailure>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned place for an exact query string.
    pub fn with_place(
        self,
        query: impl Into<String>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        let address = address.into();
        let place = Place {
            address: address.clone(),
            latitude,
            longitude,
            raw: json!({ "display_name": address }),
        };
        self.places.write().unwrap().insert(query.into(), place);
        self
    }

    /// Make an exact query string fail with the given error class.
    pub fn with_failure(self, query: impl Into<String>, failure: MockFailure) -> Self {
        self.failures.write().unwrap().insert(query.into(), failure);
        self
    }

    /// Queries received, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

#[async_trait]
impl Geocoder for MockGeocoder {
    async fn geocode(&self, query: &str) -> GeocoderResult<Option<Place>> {
        self.calls.write().unwrap().push(query.to_string());

        if let Some(failure) = self.failures.read().unwrap().get(query) {
            return Err(match failure {
                MockFailure::Timeout => GeocodeError::Timeout {
                    query: query.to_string(),
                },
                MockFailure::Unavailable => GeocodeError::Unavailable,
                MockFailure::Service => GeocodeError::Service("mock service failure".into()),
            });
        }

        Ok(self.places.read().unwrap().get(query).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_canned_place_and_tracks_calls() {
        let mock = MockGeocoder::new().with_place("Paris", "Paris, France", 48.8566, 2.3522);

        let place = mock.geocode("Paris").await.unwrap().unwrap();
        assert_eq!(place.address, "Paris, France");

        assert!(mock.geocode("Unknown").await.unwrap().is_none());
        assert_eq!(mock.calls(), vec!["Paris", "Unknown"]);
    }

    #[tokio::test]
    async fn test_mock_failure_classes() {
        let mock = MockGeocoder::new()
            .with_failure("a", MockFailure::Timeout)
            .with_failure("b", MockFailure::Unavailable)
            .with_failure("c", MockFailure::Service);

        assert!(matches!(
            mock.geocode("a").await,
            Err(GeocodeError::Timeout { .. })
        ));
        assert!(matches!(
            mock.geocode("b").await,
            Err(GeocodeError::Unavailable)
        ));
        assert!(matches!(
            mock.geocode("c").await,
            Err(GeocodeError::Service(_))
        ));
    }
}
