//! In-memory listing source.

use async_trait::async_trait;
use tracing::debug;

use super::{first_listing, FetchError, ListingFetcher};
use crate::model::{Listing, ListingId};

/// Serves a fixed catalog.
///
/// Used by the demo binary and by tests that need real store behaviour
/// without scripting every call.
#[derive(Debug, Clone, Default)]
pub struct FixtureFetcher {
    listings: Vec<Listing>,
}

impl FixtureFetcher {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Parses a catalog in the listing API's JSON format (an array of listings).
    pub fn from_json(json: &str) -> Result<Self, FetchError> {
        let listings: Vec<Listing> = serde_json::from_str(json)?;
        Ok(Self::new(listings))
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[async_trait]
impl ListingFetcher for FixtureFetcher {
    async fn fetch_all(&self) -> Result<Vec<Listing>, FetchError> {
        debug!(count = self.listings.len(), "Serving fixture catalog");
        Ok(self.listings.clone())
    }

    async fn fetch_one(&self, id: &ListingId) -> Result<Listing, FetchError> {
        debug!(%id, "Serving fixture listing");
        let response = self
            .listings
            .iter()
            .filter(|listing| &listing.id == id)
            .cloned()
            .collect();
        first_listing(id, response)
    }
}
