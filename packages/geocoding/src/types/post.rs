//! The social post record consumed and produced by the pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::location::EnrichedLocation;

/// A social-media post as handed to the pipeline.
///
/// Only the fields the location pipeline reads are typed. Everything else a
/// feed delivers is carried through `extra` untouched, so the enriched record
/// stays suitable for downstream persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Post body text
    #[serde(default)]
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Explicit geotag, when the author shared one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<PostGeo>,

    /// Structured place tag attached by the platform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<PostPlace>,

    /// Author profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,

    /// Location enrichment, attached by the pipeline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<EnrichedLocation>,

    /// Unrecognized feed fields, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Post {
    /// Create a post with only body text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            created_at: None,
            lang: None,
            geo: None,
            place: None,
            user: None,
            location: None,
            extra: Map::new(),
        }
    }

    /// Attach an author profile.
    pub fn with_user(mut self, user: UserProfile) -> Self {
        self.user = Some(user);
        self
    }

    /// Attach a platform place tag.
    pub fn with_place(mut self, full_name: impl Into<String>) -> Self {
        self.place = Some(PostPlace {
            full_name: Some(full_name.into()),
            extra: Map::new(),
        });
        self
    }

    /// Attach explicit coordinates.
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.geo = Some(PostGeo {
            coordinates: Some([latitude, longitude]),
            extra: Map::new(),
        });
        self
    }
}

/// Explicit geographic coordinates on a post, `[lat, lon]` order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostGeo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<[f64; 2]>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Platform place tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPlace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Author profile fields the extractor reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Free-text profile location ("Manchester, UK", "the internet", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Free-text biography
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let input = json!({
            "id": "1234567890",
            "text": "Amazing match today in London!",
            "lang": "en",
            "public_metrics": { "retweet_count": 12 },
            "user": {
                "username": "fan123",
                "location": "Manchester, UK",
                "verified": true,
            },
        });

        let post: Post = serde_json::from_value(input).unwrap();
        assert_eq!(post.extra["public_metrics"]["retweet_count"], 12);
        assert_eq!(post.user.as_ref().unwrap().extra["verified"], true);

        let output = serde_json::to_value(&post).unwrap();
        assert_eq!(output["public_metrics"]["retweet_count"], 12);
        assert_eq!(output["user"]["verified"], true);
    }

    #[test]
    fn test_geo_coordinates_deserialize_as_lat_lon_pair() {
        let post: Post = serde_json::from_value(json!({
            "text": "",
            "geo": { "coordinates": [51.5074, -0.1278] },
        }))
        .unwrap();

        let coords = post.geo.unwrap().coordinates.unwrap();
        assert_eq!(coords, [51.5074, -0.1278]);
    }

    #[test]
    fn test_enrichment_serializes_under_location_key() {
        let mut post = Post::new("hello");
        post.location = Some(EnrichedLocation {
            raw_location: Some("London".to_string()),
            geocoded: None,
        });

        let output = serde_json::to_value(&post).unwrap();
        assert_eq!(output["location"]["raw_location"], "London");
        assert_eq!(output["location"]["geocoded"], Value::Null);
    }
}
