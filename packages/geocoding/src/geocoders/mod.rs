//! Geocoder implementations.

#[cfg(feature = "nominatim")]
pub mod nominatim;

#[cfg(feature = "nominatim")]
pub use nominatim::NominatimGeocoder;
