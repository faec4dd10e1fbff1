//! Core data types: the post record and location values.

pub mod location;
pub mod post;

pub use location::{AddressComponents, EnrichedLocation, GeocodeResult};
pub use post::{Post, PostGeo, PostPlace, UserProfile};
