//! The enrichment pipeline: extractor -> cache -> gateway, per post.

use tracing::{info, warn};

use crate::extract;
use crate::gateway::GeocodeGateway;
use crate::traits::Geocoder;
use crate::types::{EnrichedLocation, Post};

/// Produces an [`EnrichedLocation`] for each post.
pub struct LocationPipeline<G: Geocoder> {
    gateway: GeocodeGateway<G>,
}

impl<G: Geocoder> LocationPipeline<G> {
    pub fn new(gateway: GeocodeGateway<G>) -> Self {
        Self { gateway }
    }

    /// The gateway, for manual cache seeding.
    pub fn gateway(&self) -> &GeocodeGateway<G> {
        &self.gateway
    }

    /// Enrich one post with location data.
    ///
    /// Never fails: a post with no usable signal gets an empty enrichment
    /// and processing moves on.
    pub async fn enrich(&self, mut post: Post) -> Post {
        let candidate = extract::from_post(&post);

        let geocoded = match &candidate {
            Some(candidate) => self.gateway.resolve(candidate).await,
            None => None,
        };

        post.location = Some(EnrichedLocation {
            raw_location: candidate,
            geocoded,
        });
        post
    }

    /// Enrich an ordered batch of posts, flushing the cache once at the end
    /// regardless of per-item outcomes.
    pub async fn enrich_batch(&self, posts: Vec<Post>) -> Vec<Post> {
        info!(count = posts.len(), "Enriching posts with location data");

        let mut enriched = Vec::with_capacity(posts.len());
        for post in posts {
            enriched.push(self.enrich(post).await);
        }

        if let Err(e) = self.gateway.cache().flush().await {
            warn!(error = %e, "Cache flush at end of batch failed");
        }

        enriched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::LocationCache;
    use crate::stores::MemoryStorage;
    use crate::testing::MockGeocoder;
    use crate::types::UserProfile;
    use std::sync::Arc;
    use std::time::Duration;

    fn pipeline_with(mock: &MockGeocoder) -> (LocationPipeline<MockGeocoder>, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let cache = Arc::new(LocationCache::empty(storage.clone()));
        let gateway = GeocodeGateway::with_min_interval(
            mock.clone(),
            cache,
            Duration::from_millis(20),
        );
        (LocationPipeline::new(gateway), storage)
    }

    #[tokio::test]
    async fn test_enrich_attaches_geocoded_location() {
        // "Manchester, UK" contains the gazetteer entry "uk", so the
        // outbound query is the simplified term.
        let mock = MockGeocoder::new().with_place("uk", "United Kingdom", 55.3781, -3.436);
        let (pipeline, _) = pipeline_with(&mock);

        let post = Post::new("Amazing match in London! #GoTeam")
            .with_user(UserProfile::new().with_location("Manchester, UK"));
        let enriched = pipeline.enrich(post).await;

        let location = enriched.location.unwrap();
        assert_eq!(location.raw_location.as_deref(), Some("Manchester, UK"));

        let geocoded = location.geocoded.unwrap();
        assert_eq!(geocoded.input, "Manchester, UK");
        assert_eq!(geocoded.latitude, 55.3781);
        assert_eq!(mock.calls(), vec!["uk"]);
    }

    #[tokio::test]
    async fn test_enrich_without_signal_yields_empty_enrichment() {
        let mock = MockGeocoder::new();
        let (pipeline, _) = pipeline_with(&mock);

        let enriched = pipeline.enrich(Post::new("what a game")).await;

        let location = enriched.location.unwrap();
        assert_eq!(location.raw_location, None);
        assert_eq!(location.geocoded, None);
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_candidate_kept_even_when_geocoding_fails() {
        let mock = MockGeocoder::new();
        let (pipeline, _) = pipeline_with(&mock);

        let post =
            Post::new("").with_user(UserProfile::new().with_location("Gotham, Nowhere"));
        let enriched = pipeline.enrich(post).await;

        let location = enriched.location.unwrap();
        assert_eq!(location.raw_location.as_deref(), Some("Gotham, Nowhere"));
        assert_eq!(location.geocoded, None);
    }

    #[tokio::test]
    async fn test_batch_flushes_once_at_the_end() {
        let mock = MockGeocoder::new();
        let (pipeline, storage) = pipeline_with(&mock);

        let posts = vec![Post::new("no location"), Post::new("still none")];
        let enriched = pipeline.enrich_batch(posts).await;

        assert_eq!(enriched.len(), 2);
        assert_eq!(storage.persist_count(), 1);
    }

    #[tokio::test]
    async fn test_identical_posts_share_one_external_call() {
        let mock = MockGeocoder::new().with_place("uk", "United Kingdom", 55.3781, -3.436);
        let (pipeline, _) = pipeline_with(&mock);

        let post = Post::new("hello")
            .with_user(UserProfile::new().with_location("Manchester, UK"));
        pipeline.enrich_batch(vec![post.clone(), post]).await;

        assert_eq!(mock.call_count(), 1);
    }
}
