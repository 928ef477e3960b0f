//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! The store's log output is also its failure report: a load that fails is
//! logged here and nowhere else (the caller only gets
//! [`LoadOutcome::Kept`](crate::store::LoadOutcome::Kept)).
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: startup, shutdown and final catalog size
//! - **Loads**: listings replaced (`count`), current listing replaced (`id`)
//! - **Load Failures**: `error` level, with the failing `id` and the fetch error
//! - **Recommendations**: `criterion` and resulting `count`
//! - **Client Calls**: one span per client method, with its arguments
//!
//! Store-side events are logged from the store task, so they do not nest under
//! the client spans.
//!
//! ## Usage Examples
//!
//! ```bash
//! # State transitions and failures
//! RUST_LOG=info cargo run
//!
//! # Every request, search term and sort option
//! RUST_LOG=debug cargo run
//!
//! # Only this crate
//! RUST_LOG=listing_catalog=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`** the demo prints something like:
//!
//! ```text
//! INFO Store started
//! INFO Listings replaced count=6
//! INFO Current listing replaced id=3
//! INFO Recommendations computed criterion=price count=3
//! ERROR Failed to fetch listing id=99 error=Listing not found: 99
//! WARN open_listing: Listing not loaded, recommending against the previous listing
//! ```

/// Installs the global `fmt` subscriber, filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths
        .compact() // Compact format shows spans inline
        .try_init();
}
