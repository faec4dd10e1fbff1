//! The geocoder gateway: cache short-circuit, query simplification, rate
//! limiting, and the fallback cascade.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use governor::{Quota, RateLimiter};
use nonzero_ext::nonzero;
use serde_json::json;
use tracing::{debug, warn};

use crate::cache::LocationCache;
use crate::gazetteer;
use crate::traits::{Geocoder, Place};
use crate::types::GeocodeResult;

type DirectRateLimiter = RateLimiter<
    governor::state::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
>;

/// Minimum interval between outbound service queries (service usage policy).
const MIN_QUERY_INTERVAL: Duration = Duration::from_secs(1);

/// Flush the cache after this many successful service queries.
const FLUSH_EVERY: u64 = 10;

/// Prefixes used to seed phrase variants of manually inserted locations.
const MANUAL_VARIANT_PREFIXES: &[&str] = &["in", "from", "at", "near", "to"];

/// Maps a raw location string to a [`GeocodeResult`] via a geocoding
/// service, honoring its usage policy.
///
/// Each gateway owns its own rate limiter and query counter, so independent
/// instances (e.g. in tests) never interfere.
pub struct GeocodeGateway<G: Geocoder> {
    geocoder: G,
    cache: Arc<LocationCache>,
    limiter: DirectRateLimiter,
    query_count: AtomicU64,
}

impl<G: Geocoder> GeocodeGateway<G> {
    /// Create a gateway over a geocoder and a loaded cache.
    pub fn new(geocoder: G, cache: Arc<LocationCache>) -> Self {
        Self::with_min_interval(geocoder, cache, MIN_QUERY_INTERVAL)
    }

    /// Create a gateway with a custom minimum query interval.
    pub fn with_min_interval(
        geocoder: G,
        cache: Arc<LocationCache>,
        min_interval: Duration,
    ) -> Self {
        let quota = Quota::with_period(min_interval)
            .expect("query interval must be non-zero")
            .allow_burst(nonzero!(1u32));

        Self {
            geocoder,
            cache,
            limiter: RateLimiter::direct(quota),
            query_count: AtomicU64::new(0),
        }
    }

    /// The cache this gateway reads and writes.
    pub fn cache(&self) -> &LocationCache {
        &self.cache
    }

    /// Resolve a raw location string to a geocoded result.
    ///
    /// The cache is consulted first; a hit costs no external call and no
    /// rate-limit delay. On a miss the query term is simplified against the
    /// gazetteer, and on failure or no-match the gateway retries each
    /// gazetteer token of the input on its own. Service failures degrade to
    /// `None`; they never propagate.
    pub async fn resolve(&self, input: &str) -> Option<GeocodeResult> {
        if input.is_empty() {
            return None;
        }

        if let Some(cached) = self.cache.get(input) {
            debug!(input, "Location cache hit");
            return Some(cached);
        }

        let query = simplify_query(input);
        if let Some(place) = self.query(query).await {
            return Some(self.store(input, place));
        }

        let tokens: Vec<&str> = input.split_whitespace().collect();
        if tokens.len() > 1 {
            for token in tokens {
                if !gazetteer::is_known(token) {
                    continue;
                }
                if let Some(place) = self.query(token).await {
                    return Some(self.store(input, place));
                }
            }
        }

        None
    }

    /// Seed the cache with a known-good location without calling the
    /// service.
    ///
    /// The entry is stored under `location` and under common phrase
    /// variants ("in X", "from X", ...) so text-mined candidates hit the
    /// cache too, then flushed immediately.
    pub async fn insert_manual(
        &self,
        location: &str,
        latitude: f64,
        longitude: f64,
        city: Option<&str>,
        country: Option<&str>,
    ) -> GeocodeResult {
        let address = match (city, country) {
            (Some(city), Some(country)) => format!("{}, {}", city, country),
            (Some(city), None) => city.to_string(),
            (None, Some(country)) => country.to_string(),
            (None, None) => location.to_string(),
        };

        let raw = json!({
            "place_id": format!("manual_{}", location.replace(' ', "_")),
            "display_name": address,
            "address": { "city": city, "country": country },
        });

        let result = GeocodeResult {
            input: location.to_string(),
            address,
            latitude,
            longitude,
            raw,
        };

        self.cache.put(location, result.clone());
        for prefix in MANUAL_VARIANT_PREFIXES {
            self.cache
                .put(format!("{} {}", prefix, location), result.clone());
        }

        if let Err(e) = self.cache.flush().await {
            warn!(error = %e, "Cache flush after manual insert failed");
        }

        debug!(location, latitude, longitude, "Added known location");
        result
    }

    // One rate-limited attempt; failures are logged and become None.
    async fn query(&self, term: &str) -> Option<Place> {
        self.limiter.until_ready().await;

        match self.geocoder.geocode(term).await {
            Ok(found) => {
                self.note_query().await;
                found
            }
            Err(e) => {
                warn!(query = term, error = %e, "Geocoding attempt failed");
                None
            }
        }
    }

    // Count a completed query and flush on every FLUSH_EVERY-th.
    async fn note_query(&self) {
        let count = self.query_count.fetch_add(1, Ordering::Relaxed) + 1;
        if count % FLUSH_EVERY == 0 {
            if let Err(e) = self.cache.flush().await {
                warn!(error = %e, "Periodic cache flush failed");
            }
        }
    }

    // Cache under the original input string, never the substituted term.
    fn store(&self, input: &str, place: Place) -> GeocodeResult {
        let result = GeocodeResult {
            input: input.to_string(),
            address: place.address,
            latitude: place.latitude,
            longitude: place.longitude,
            raw: place.raw,
        };
        self.cache.put(input, result.clone());
        result
    }
}

// Prefer a known gazetteer term over messy free text.
fn simplify_query(input: &str) -> &str {
    if gazetteer::is_known(input) {
        input
    } else if let Some(place) = gazetteer::first_contained(input) {
        debug!(input, query = place, "Simplified geocoding query");
        place
    } else {
        input
    }
}
