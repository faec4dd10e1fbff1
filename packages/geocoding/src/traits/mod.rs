//! Trait seams: the geocoding service and cache storage collaborators.

pub mod geocoder;
pub mod storage;

pub use geocoder::{Geocoder, Place};
pub use storage::CacheStorage;
