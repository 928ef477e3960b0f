//! # Listing Catalog Demo
//!
//! Walks through one catalog session against the bundled fixture:
//! 1.  Load the catalog.
//! 2.  Search and sort it.
//! 3.  Open a listing and show its recommendations.
//! 4.  Open a listing that does not exist, and see the store keep its state.

use listing_catalog::fetch::FixtureFetcher;
use listing_catalog::lifecycle::{setup_tracing, CatalogSystem, StoreConfig};
use listing_catalog::model::{Criterion, ListingId, SortOption};
use std::sync::Arc;
use tracing::{info, warn, Instrument};

const HOUSES: &str = include_str!("../fixtures/houses.json");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = StoreConfig::from_env()?;
    let fetcher = FixtureFetcher::from_json(HOUSES)?;
    info!(listings = fetcher.len(), "Starting catalog session");

    let system = CatalogSystem::start(&config, Arc::new(fetcher));
    let store = system.store.clone();

    let outcome = store.load_all().await?;
    if !outcome.is_applied() {
        warn!(?outcome, "Catalog could not be loaded");
    }

    let span = tracing::info_span!("browse");
    async {
        store.set_search_term("spring").await?;
        store.set_sort_option(SortOption::Price).await?;
        for listing in store.sorted_results().await?.iter() {
            info!(
                id = %listing.id,
                price = listing.price,
                street = %listing.location.street,
                "Search result"
            );
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("detail");
    async {
        let detail = store.open_listing(ListingId::Number(3), Criterion::Price).await?;
        for listing in &detail.recommendations {
            info!(id = %listing.id, price = listing.price, "Recommended");
        }

        // An unknown listing leaves the previous one in place
        let missing = store.open_listing(ListingId::Number(99), Criterion::Size).await?;
        if let Some(listing) = &missing.listing {
            info!(id = %listing.id, "Still showing");
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    drop(store);
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
