//! Typed errors for the Nominatim client.
//!
//! Uses `thiserror` for library errors (not `anyhow`). Timeout, unavailable,
//! and generic API failures are distinct variants so callers can decide which
//! classes are transient.

use thiserror::Error;

/// Errors that can occur talking to the Nominatim API.
#[derive(Debug, Error)]
pub enum NominatimError {
    /// Request exceeded the client timeout
    #[error("timeout querying nominatim for: {query}")]
    Timeout { query: String },

    /// Service overloaded or down (HTTP 429 / 5xx)
    #[error("nominatim unavailable: HTTP {status}")]
    Unavailable { status: u16 },

    /// Any other non-success response
    #[error("nominatim API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (DNS, connection, TLS)
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("invalid nominatim response: {0}")]
    InvalidResponse(String),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, NominatimError>;
