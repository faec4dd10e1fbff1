//! Response types for the Nominatim search API.

use serde_json::Value;

/// A single match returned by the search endpoint.
///
/// The parsed fields cover what most callers need; the full untouched
/// response object is kept in `raw` so nothing the service returned is lost.
#[derive(Debug, Clone)]
pub struct SearchHit {
    /// Human-readable address, most specific component first
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// The complete response object for this hit
    pub raw: Value,
}

impl SearchHit {
    /// Parse one element of the search response array.
    pub(crate) fn from_value(value: Value) -> std::result::Result<Self, String> {
        let display_name = value
            .get("display_name")
            .and_then(Value::as_str)
            .ok_or("missing display_name")?
            .to_string();
        let latitude = parse_coord(&value, "lat")?;
        let longitude = parse_coord(&value, "lon")?;

        Ok(Self {
            display_name,
            latitude,
            longitude,
            raw: value,
        })
    }
}

// Nominatim encodes coordinates as JSON strings.
fn parse_coord(value: &Value, key: &str) -> std::result::Result<f64, String> {
    let text = value
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| format!("missing {}", key))?;
    text.parse()
        .map_err(|_| format!("invalid {}: {}", key, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_hit() {
        let value = json!({
            "place_id": 12345,
            "display_name": "Manchester, Greater Manchester, England, United Kingdom",
            "lat": "53.4794892",
            "lon": "-2.2451148",
        });

        let hit = SearchHit::from_value(value).unwrap();
        assert_eq!(
            hit.display_name,
            "Manchester, Greater Manchester, England, United Kingdom"
        );
        assert!((hit.latitude - 53.4794892).abs() < 1e-9);
        assert!((hit.longitude + 2.2451148).abs() < 1e-9);
        assert_eq!(hit.raw["place_id"], 12345);
    }

    #[test]
    fn test_rejects_missing_fields() {
        let value = json!({ "display_name": "Somewhere", "lat": "1.0" });
        assert!(SearchHit::from_value(value).is_err());
    }

    #[test]
    fn test_rejects_non_numeric_coordinates() {
        let value = json!({
            "display_name": "Somewhere",
            "lat": "not-a-number",
            "lon": "0.0",
        });
        assert!(SearchHit::from_value(value).is_err());
    }
}
