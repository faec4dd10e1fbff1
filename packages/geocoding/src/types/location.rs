//! Location values: geocoded results and the enrichment attached to posts.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A successfully geocoded location.
///
/// `input` is always the exact string used as the cache key, even when the
/// outbound query used a simplified term. Address and coordinates are either
/// all present or the whole result is absent; partial results do not exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    /// The raw location string this result was resolved for
    pub input: String,

    /// Human-readable address, most specific component first
    pub address: String,

    pub latitude: f64,

    pub longitude: f64,

    /// Opaque provider payload
    #[serde(default)]
    pub raw: Value,
}

impl GeocodeResult {
    /// Decompose `address` into coarse components.
    ///
    /// Display addresses read most-specific-first, so the trailing components
    /// are taken as city, state/province, and country. Fewer components than
    /// expected populate fewer fields; this never fails.
    pub fn address_components(&self) -> AddressComponents {
        let parts: Vec<&str> = if self.address.is_empty() {
            Vec::new()
        } else {
            self.address.split(", ").collect()
        };

        match parts.len() {
            0 => AddressComponents::default(),
            1 => AddressComponents {
                country: Some(parts[0].to_string()),
                ..Default::default()
            },
            2 => AddressComponents {
                state_province: Some(parts[0].to_string()),
                country: Some(parts[1].to_string()),
                ..Default::default()
            },
            n => AddressComponents {
                city: Some(parts[n - 3].to_string()),
                state_province: Some(parts[n - 2].to_string()),
                country: Some(parts[n - 1].to_string()),
            },
        }
    }
}

/// Coarse address components decomposed from a display address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressComponents {
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub country: Option<String>,
}

/// Location enrichment attached to a post after processing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichedLocation {
    /// Best-guess raw location string the extractor produced
    pub raw_location: Option<String>,

    /// Geocoded form of `raw_location`, when the gateway resolved it
    pub geocoded: Option<GeocodeResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result_with_address(address: &str) -> GeocodeResult {
        GeocodeResult {
            input: "test".to_string(),
            address: address.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            raw: json!({}),
        }
    }

    #[test]
    fn test_components_from_full_address() {
        let components = result_with_address(
            "Manchester, Greater Manchester, England, United Kingdom",
        )
        .address_components();

        assert_eq!(components.city.as_deref(), Some("Greater Manchester"));
        assert_eq!(components.state_province.as_deref(), Some("England"));
        assert_eq!(components.country.as_deref(), Some("United Kingdom"));
    }

    #[test]
    fn test_components_degrade_with_two_parts() {
        let components = result_with_address("England, United Kingdom").address_components();

        assert_eq!(components.city, None);
        assert_eq!(components.state_province.as_deref(), Some("England"));
        assert_eq!(components.country.as_deref(), Some("United Kingdom"));
    }

    #[test]
    fn test_components_degrade_with_one_part() {
        let components = result_with_address("Japan").address_components();

        assert_eq!(components.city, None);
        assert_eq!(components.state_province, None);
        assert_eq!(components.country.as_deref(), Some("Japan"));
    }

    #[test]
    fn test_components_from_empty_address() {
        let components = result_with_address("").address_components();
        assert_eq!(components, AddressComponents::default());
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let result = GeocodeResult {
            input: "London".to_string(),
            address: "London, England, United Kingdom".to_string(),
            latitude: 51.5074,
            longitude: -0.1278,
            raw: json!({ "place_id": 42 }),
        };

        let encoded = serde_json::to_string(&result).unwrap();
        let decoded: GeocodeResult = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, result);
    }
}
