//! # Listing Catalog
//!
//! > **The state engine behind a real-estate catalog browser.**
//!
//! This crate holds the listings fetched from a listing API and derives the views
//! a catalog front end shows: a text search, a sorted projection of that search,
//! and a set of recommendations for the listing being viewed.
//!
//! ## 🏗️ Design
//!
//! ### Plain data in the middle
//! All the logic lives in [`catalog`]: a synchronous [`ListingCatalog`](catalog::ListingCatalog)
//! plus pure functions for search, sort and recommendation. The derived views are
//! recomputed from state on every read, so there is no cache to keep in sync.
//!
//! ### An actor around it
//! A catalog session is shared by whatever code drives the pages. The [`store`]
//! module wraps the catalog in an actor: one Tokio task owns the state and
//! processes requests one at a time, and callers talk to it through a cloneable
//! [`ListingStoreClient`](store::ListingStoreClient). There is no global instance;
//! the client is passed to whoever needs it.
//!
//! ### Fetching is someone else's job
//! Listings come from a [`ListingFetcher`](fetch::ListingFetcher) injected when
//! the store starts. A failed fetch never reaches the caller as an error: the
//! store logs it, keeps its previous state and reports
//! [`LoadOutcome::Kept`](store::LoadOutcome::Kept).
//!
//! ### Deterministic randomness
//! Recommendations are padded with a random draw when too few listings are
//! similar enough. The random source is injectable, so tests (or a configured
//! `LISTING_RNG_SEED`) get reproducible padding.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - [`Listing`](model::Listing), [`SortOption`](model::SortOption), [`Criterion`](model::Criterion)
//! - [`catalog`] - state and derivations
//! - [`store`] - the actor, its messages and its client
//! - [`fetch`] - the fetcher contract, a fixture fetcher and a mock
//! - [`lifecycle`] - configuration, tracing setup and [`CatalogSystem`](lifecycle::CatalogSystem)
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod catalog;
pub mod fetch;
pub mod lifecycle;
pub mod model;
pub mod store;
