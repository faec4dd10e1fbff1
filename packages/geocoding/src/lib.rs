//! Location enrichment pipeline for social posts.
//!
//! Turns the noisy, partially-structured location signals on a post
//! (explicit coordinates, platform place tags, profile strings, free-text
//! mentions) into a single geocoded point, under a strict external rate
//! limit, with persistent caching and graceful degradation at every step.
//! No failure in this library is fatal: every degraded path ends in "no
//! location data for this item" and processing continues.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use geocoding::{
//!     GeocodeGateway, JsonFileStorage, LocationCache, LocationPipeline,
//!     NominatimGeocoder, Post,
//! };
//!
//! let storage = Arc::new(JsonFileStorage::new("location_cache.json"));
//! let cache = Arc::new(LocationCache::load(storage).await);
//! let geocoder = NominatimGeocoder::new("fanpulse/0.1 (ops@fanpulse.example)");
//! let pipeline = LocationPipeline::new(GeocodeGateway::new(geocoder, cache));
//!
//! let enriched = pipeline.enrich(post).await;
//! println!("{:?}", enriched.location);
//! ```
//!
//! # Modules
//!
//! - [`extract`] - signal cascade producing one raw location string per post
//! - [`gazetteer`] - fixed place list and non-geographic ignore-list
//! - [`clean`] - feed-text preprocessing ahead of mining
//! - [`cache`] / [`stores`] - durable location cache with pluggable backends
//! - [`gateway`] - rate-limited, cache-backed geocoding
//! - [`pipeline`] - per-post and batch orchestration
//! - [`geocoders`] - production geocoder implementations
//! - [`testing`] - mock geocoder for tests

pub mod cache;
pub mod clean;
pub mod error;
pub mod extract;
pub mod gateway;
pub mod gazetteer;
pub mod geocoders;
pub mod pipeline;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use cache::LocationCache;
pub use error::{CacheError, GeocodeError};
pub use gateway::GeocodeGateway;
pub use pipeline::LocationPipeline;
pub use stores::{JsonFileStorage, MemoryStorage};
pub use traits::{CacheStorage, Geocoder, Place};
pub use types::{
    AddressComponents, EnrichedLocation, GeocodeResult, Post, PostGeo, PostPlace, UserProfile,
};

#[cfg(feature = "nominatim")]
pub use geocoders::NominatimGeocoder;
