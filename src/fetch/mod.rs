//! # Listing Fetch Service
//!
//! The catalog does not talk to the network itself. It is handed a
//! [`ListingFetcher`] and calls it whenever a load is requested.
//!
//! ## Implementations
//!
//! - [`FixtureFetcher`] - serves a fixed catalog from memory.
//! - [`mock::MockFetcher`] - scripted responses for tests.
//!
//! An HTTP-backed fetcher belongs to the application wiring the catalog up;
//! whatever transport it uses, it reports failures as [`FetchError`].

pub mod error;
pub mod fixture;
pub mod mock;

pub use error::*;
pub use fixture::*;

use async_trait::async_trait;

use crate::model::{Listing, ListingId};

/// Source of listing records.
#[async_trait]
pub trait ListingFetcher: Send + Sync + 'static {
    /// Fetches the full catalog, in the order the source returns it.
    async fn fetch_all(&self) -> Result<Vec<Listing>, FetchError>;

    /// Fetches a single listing by id.
    async fn fetch_one(&self, id: &ListingId) -> Result<Listing, FetchError>;
}

/// Unwraps a single-listing response.
///
/// The listing API answers a lookup by id with an array. The first element is
/// the listing; an empty array means the id is unknown.
pub fn first_listing(id: &ListingId, response: Vec<Listing>) -> Result<Listing, FetchError> {
    response
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::NotFound(id.clone()))
}
