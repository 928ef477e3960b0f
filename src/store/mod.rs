//! # Listing Store
//!
//! The session-wide home of the [`ListingCatalog`](crate::catalog::ListingCatalog),
//! shared between callers as an actor.
//!
//! ## Structure
//!
//! - [`actor`] - [`ListingStore`], the task that owns the catalog
//! - [`client`] - [`ListingStoreClient`], the cloneable handle callers use
//! - [`message`] - [`StoreRequest`] and [`LoadOutcome`]
//! - [`error`] - [`StoreError`] for store communication failures
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use listing_catalog::fetch::FixtureFetcher;
//! use listing_catalog::lifecycle::StoreConfig;
//! use listing_catalog::model::{Listing, Location, SortOption};
//! use listing_catalog::store::ListingStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = FixtureFetcher::new(vec![
//!         Listing::new(1i64, 350000.0, 120.0, Location::new("Main St", "Springfield", "90210")),
//!         Listing::new(2i64, 180000.0, 70.0, Location::new("Elm Road", "Shelbyville", "90211")),
//!     ]);
//!
//!     // Create the store, then start it with its fetch source
//!     let (store, client) = ListingStore::new(&StoreConfig::default());
//!     tokio::spawn(store.run(Arc::new(fetcher)));
//!
//!     client.load_all().await?;
//!     client.set_sort_option(SortOption::Price).await?;
//!     let sorted = client.sorted_results().await?;
//!     assert_eq!(sorted[0].price, 180000.0);
//!     Ok(())
//! }
//! ```
//!
//! ## Failure Policy
//!
//! Loads never fail because the fetch failed. The store logs the failure
//! through `tracing`, keeps its previous state, and answers
//! [`LoadOutcome::Kept`]. A [`StoreError`] only means the store itself is gone.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;

pub use actor::ListingStore;
pub use client::{ListingDetail, ListingStoreClient};
pub use error::StoreError;
pub use message::{LoadOutcome, Response, StoreRequest};
