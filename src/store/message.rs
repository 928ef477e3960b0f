//! # Store Messages
//!
//! Everything a [`ListingStore`](super::ListingStore) can be asked to do travels
//! as a [`StoreRequest`]. Each request carries a one-shot channel for the answer.

use std::sync::Arc;
use tokio::sync::oneshot;

use crate::catalog::CatalogSnapshot;
use crate::fetch::FetchError;
use crate::model::{Criterion, Listing, ListingId, SortOption};

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<T>;

/// What happened to the store state after a load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The fetch succeeded and its result replaced the previous state.
    Applied { count: usize },
    /// The fetch failed. The previous state was kept and the failure logged.
    Kept(FetchError),
}

impl LoadOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, LoadOutcome::Applied { .. })
    }
}

/// Messages understood by the store.
///
/// # Loads
/// `LoadAll` and `LoadOne` only start a fetch. When the fetch resolves, the
/// fetch task posts `ListingsFetched` / `ListingFetched` back to the store,
/// which applies the result and answers the original caller. Other requests
/// are served while fetches are in flight.
///
/// # Reads
/// Each read variant returns one field or derived view. `Snapshot` returns all
/// of them, computed at the same instant.
#[derive(Debug)]
pub enum StoreRequest {
    LoadAll {
        respond_to: Response<LoadOutcome>,
    },
    LoadOne {
        id: ListingId,
        respond_to: Response<LoadOutcome>,
    },
    ListingsFetched {
        result: Result<Vec<Listing>, FetchError>,
        respond_to: Response<LoadOutcome>,
    },
    ListingFetched {
        id: ListingId,
        result: Result<Listing, FetchError>,
        respond_to: Response<LoadOutcome>,
    },
    SetSearchTerm {
        term: String,
        respond_to: Response<()>,
    },
    SetSortOption {
        option: SortOption,
        respond_to: Response<()>,
    },
    /// Answers with the current listing and the recommendations computed for it.
    ComputeRecommendations {
        criterion: Criterion,
        respond_to: Response<(Option<Listing>, Vec<Listing>)>,
    },
    GetListings {
        respond_to: Response<Arc<[Listing]>>,
    },
    GetCurrentListing {
        respond_to: Response<Option<Listing>>,
    },
    GetSearchResults {
        respond_to: Response<Arc<[Listing]>>,
    },
    GetSortedResults {
        respond_to: Response<Vec<Listing>>,
    },
    GetRecommendations {
        respond_to: Response<Vec<Listing>>,
    },
    GetSearchTerm {
        respond_to: Response<String>,
    },
    GetSortOption {
        respond_to: Response<SortOption>,
    },
    Snapshot {
        respond_to: Response<CatalogSnapshot>,
    },
}
