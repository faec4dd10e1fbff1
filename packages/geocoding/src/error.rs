//! Typed errors for the geocoding library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors raised by a [`Geocoder`](crate::traits::Geocoder) implementation.
///
/// The gateway treats every variant as transient: a failed attempt counts as
/// "no result" and the fallback cascade continues.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Service did not answer within the client timeout
    #[error("geocoding timeout for: {query}")]
    Timeout { query: String },

    /// Service overloaded or down
    #[error("geocoding service unavailable")]
    Unavailable,

    /// Any other service failure
    #[error("geocoding service error: {0}")]
    Service(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised by cache storage backends.
///
/// Non-fatal to a run: callers log them and keep using the in-memory cache.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Reading or writing durable storage failed
    #[error("cache storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored mapping could not be decoded
    #[error("cache deserialization error: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// In-memory mapping could not be encoded
    #[error("cache serialization error: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type alias for geocoder operations.
pub type GeocoderResult<T> = std::result::Result<T, GeocodeError>;

/// Result type alias for cache operations.
pub type CacheResult<T> = std::result::Result<T, CacheError>;
