//! Enrich a handful of posts end-to-end against the real geocoding service.
//!
//! Seeds the cache with a few known-good locations, then runs the pipeline
//! over sample posts and prints what each one resolved to. Respects the
//! service's 1 req/s policy, so a cold cache makes this take a few seconds.
//!
//! ```bash
//! cargo run --example enrich_posts
//! ```

use std::sync::Arc;

use anyhow::Result;
use geocoding::{
    GeocodeGateway, JsonFileStorage, LocationCache, LocationPipeline, NominatimGeocoder, Post,
    UserProfile,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let storage = Arc::new(JsonFileStorage::new("location_cache.json"));
    let cache = Arc::new(LocationCache::load(storage).await);
    let geocoder = NominatimGeocoder::new("fanpulse/0.1 (ops@fanpulse.example)");
    let pipeline = LocationPipeline::new(GeocodeGateway::new(geocoder, cache));

    // Seed a few locations we already trust; these never hit the service.
    let gateway = pipeline.gateway();
    gateway
        .insert_manual("London", 51.5074, -0.1278, Some("London"), Some("United Kingdom"))
        .await;
    gateway
        .insert_manual("Manchester", 53.4808, -2.2426, Some("Manchester"), Some("United Kingdom"))
        .await;
    gateway
        .insert_manual("Tokyo", 35.6762, 139.6503, Some("Tokyo"), Some("Japan"))
        .await;

    let posts = vec![
        Post::new("Amazing match today in London! The team played brilliantly! #GoTeam")
            .with_user(UserProfile::new().with_location("Manchester, UK")),
        Post::new("Watching from home, what a finish!"),
        Post::new("Road trip to the final!").with_coordinates(48.8566, 2.3522),
        Post::new("Counting down the days")
            .with_user(UserProfile::new().with_description("Coffee person based in Oslo")),
    ];

    let enriched = pipeline.enrich_batch(posts).await;

    for post in &enriched {
        let location = post.location.as_ref().expect("pipeline attaches location");
        println!("text:     {}", post.text);
        println!("raw:      {:?}", location.raw_location);
        match &location.geocoded {
            Some(geocoded) => {
                let components = geocoded.address_components();
                println!("address:  {}", geocoded.address);
                println!("coords:   ({}, {})", geocoded.latitude, geocoded.longitude);
                println!("country:  {:?}", components.country);
            }
            None => println!("geocoded: (none)"),
        }
        println!();
    }

    Ok(())
}
