//! # Listing Store Client
//!
//! The handle view and controller code use to talk to a [`ListingStore`](super::ListingStore).
//! It is cheap to clone; every clone addresses the same store.

use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument, warn};

use super::error::StoreError;
use super::message::{LoadOutcome, Response, StoreRequest};
use crate::catalog::CatalogSnapshot;
use crate::model::{Criterion, Listing, ListingId, SortOption};

/// What the detail page needs after opening a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDetail {
    /// Result of loading the listing.
    pub outcome: LoadOutcome,
    /// The current listing after the load. Still the previous one if the load failed.
    pub listing: Option<Listing>,
    pub recommendations: Vec<Listing>,
}

/// A type-safe client for interacting with a `ListingStore`.
#[derive(Clone)]
pub struct ListingStoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl ListingStoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(&self, make: impl FnOnce(Response<T>) -> StoreRequest) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)
    }

    // --- Loads ---

    /// Fetches the full catalog and replaces the store's listings with it.
    ///
    /// A failed fetch is not an `Err`: the store keeps its previous listings,
    /// logs the failure and reports [`LoadOutcome::Kept`].
    #[instrument(skip(self))]
    pub async fn load_all(&self) -> Result<LoadOutcome, StoreError> {
        debug!("Sending request");
        self.request(|respond_to| StoreRequest::LoadAll { respond_to }).await
    }

    /// Fetches one listing and makes it the current listing.
    ///
    /// Failure handling is the same as [`load_all`](Self::load_all).
    #[instrument(skip(self))]
    pub async fn load_one(&self, id: ListingId) -> Result<LoadOutcome, StoreError> {
        debug!("Sending request");
        self.request(|respond_to| StoreRequest::LoadOne { id, respond_to }).await
    }

    // --- Writes ---

    #[instrument(skip_all)]
    pub async fn set_search_term(&self, term: impl Into<String>) -> Result<(), StoreError> {
        let term = term.into();
        self.request(|respond_to| StoreRequest::SetSearchTerm { term, respond_to }).await
    }

    #[instrument(skip(self))]
    pub async fn set_sort_option(&self, option: SortOption) -> Result<(), StoreError> {
        self.request(|respond_to| StoreRequest::SetSortOption { option, respond_to }).await
    }

    /// Recomputes the recommendations for the current listing and returns them.
    ///
    /// Without a current listing nothing is recomputed and the previous
    /// recommendations are returned.
    #[instrument(skip(self))]
    pub async fn compute_recommendations(&self, criterion: Criterion) -> Result<Vec<Listing>, StoreError> {
        debug!("Sending request");
        let (_, recommendations) = self.recommend_current(criterion).await?;
        Ok(recommendations)
    }

    /// Recomputes the recommendations and returns them with the listing they were computed for.
    async fn recommend_current(&self, criterion: Criterion) -> Result<(Option<Listing>, Vec<Listing>), StoreError> {
        self.request(|respond_to| StoreRequest::ComputeRecommendations { criterion, respond_to })
            .await
    }

    // --- Reads ---

    pub async fn listings(&self) -> Result<Arc<[Listing]>, StoreError> {
        self.request(|respond_to| StoreRequest::GetListings { respond_to }).await
    }

    pub async fn current_listing(&self) -> Result<Option<Listing>, StoreError> {
        self.request(|respond_to| StoreRequest::GetCurrentListing { respond_to }).await
    }

    pub async fn search_results(&self) -> Result<Arc<[Listing]>, StoreError> {
        self.request(|respond_to| StoreRequest::GetSearchResults { respond_to }).await
    }

    pub async fn sorted_results(&self) -> Result<Vec<Listing>, StoreError> {
        self.request(|respond_to| StoreRequest::GetSortedResults { respond_to }).await
    }

    pub async fn recommendations(&self) -> Result<Vec<Listing>, StoreError> {
        self.request(|respond_to| StoreRequest::GetRecommendations { respond_to }).await
    }

    pub async fn search_term(&self) -> Result<String, StoreError> {
        self.request(|respond_to| StoreRequest::GetSearchTerm { respond_to }).await
    }

    pub async fn sort_option(&self) -> Result<SortOption, StoreError> {
        self.request(|respond_to| StoreRequest::GetSortOption { respond_to }).await
    }

    /// All state and derived views, read in a single step.
    pub async fn snapshot(&self) -> Result<CatalogSnapshot, StoreError> {
        self.request(|respond_to| StoreRequest::Snapshot { respond_to }).await
    }

    // --- Detail page ---

    /// Loads a listing and recommends similar ones, the way the detail page does on open.
    ///
    /// Recommendations are computed even if the load failed, against whatever
    /// listing was current before. The returned listing is the one the
    /// recommendations were computed for, even if another load landed after
    /// this one.
    #[instrument(skip(self))]
    pub async fn open_listing(&self, id: ListingId, criterion: Criterion) -> Result<ListingDetail, StoreError> {
        let outcome = self.load_one(id).await?;
        if !outcome.is_applied() {
            warn!("Listing not loaded, recommending against the previous listing");
        }
        let (listing, recommendations) = self.recommend_current(criterion).await?;
        Ok(ListingDetail {
            outcome,
            listing,
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use crate::model::Location;

    fn listing(id: i64) -> Listing {
        Listing::new(id, 100000.0, 80.0, Location::new("Main St", "Springfield", "90210"))
    }

    #[tokio::test]
    async fn test_open_listing_loads_then_recommends() {
        let (sender, mut receiver) = mpsc::channel(10);
        let client = ListingStoreClient::new(sender);

        let open_task = tokio::spawn(async move {
            client.open_listing(ListingId::Number(1), Criterion::Size).await
        });

        match receiver.recv().await {
            Some(StoreRequest::LoadOne { id, respond_to }) => {
                assert_eq!(id, ListingId::Number(1));
                respond_to.send(LoadOutcome::Applied { count: 1 }).unwrap();
            }
            other => panic!("Expected LoadOne request, got {:?}", other),
        }

        match receiver.recv().await {
            Some(StoreRequest::ComputeRecommendations { criterion, respond_to }) => {
                assert_eq!(criterion, Criterion::Size);
                respond_to.send((Some(listing(1)), vec![listing(2), listing(3)])).unwrap();
            }
            other => panic!("Expected ComputeRecommendations request, got {:?}", other),
        }

        let detail = open_task.await.unwrap().unwrap();
        assert!(detail.outcome.is_applied());
        assert_eq!(detail.listing, Some(listing(1)));
        assert_eq!(detail.recommendations.len(), 2);
    }

    #[tokio::test]
    async fn test_open_listing_recommends_after_failed_load() {
        let (sender, mut receiver) = mpsc::channel(10);
        let client = ListingStoreClient::new(sender);

        let open_task = tokio::spawn(async move {
            client.open_listing(ListingId::Number(9), Criterion::Price).await
        });

        if let Some(StoreRequest::LoadOne { respond_to, .. }) = receiver.recv().await {
            let error = FetchError::NotFound(ListingId::Number(9));
            respond_to.send(LoadOutcome::Kept(error)).unwrap();
        } else {
            panic!("Expected LoadOne request");
        }
        if let Some(StoreRequest::ComputeRecommendations { respond_to, .. }) = receiver.recv().await {
            respond_to.send((None, Vec::new())).unwrap();
        } else {
            panic!("Expected ComputeRecommendations request");
        }

        let detail = open_task.await.unwrap().unwrap();
        assert_eq!(detail.outcome, LoadOutcome::Kept(FetchError::NotFound(ListingId::Number(9))));
        assert!(detail.listing.is_none());
    }

    #[tokio::test]
    async fn test_closed_store_is_reported() {
        let (sender, receiver) = mpsc::channel(1);
        let client = ListingStoreClient::new(sender);
        drop(receiver);

        assert_eq!(client.load_all().await, Err(StoreError::StoreClosed));
        assert_eq!(client.search_term().await, Err(StoreError::StoreClosed));
    }

    #[tokio::test]
    async fn test_dropped_reply_is_reported() {
        let (sender, mut receiver) = mpsc::channel(1);
        let client = ListingStoreClient::new(sender);

        let read_task = tokio::spawn(async move { client.sorted_results().await });
        // Receive the request and drop it without answering
        let request = receiver.recv().await;
        assert!(matches!(request, Some(StoreRequest::GetSortedResults { .. })));
        drop(request);

        assert_eq!(read_task.await.unwrap(), Err(StoreError::StoreDropped));
    }
}
