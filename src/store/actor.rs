//! # Listing Store Actor
//!
//! The server half of the store. It owns the [`ListingCatalog`] and is the only
//! code that ever touches it.
//!
//! ## Concurrency Model
//!
//! The actor handles one [`StoreRequest`] at a time, so every write is applied
//! whole and no reader ever sees half of one. No `Mutex` is needed around the
//! catalog.
//!
//! Fetches are the one thing the actor does not do inline. A load request is
//! turned into a spawned task that calls the [`ListingFetcher`] and then posts
//! the result back into the actor's own mailbox:
//!
//! ```text
//! client ──LoadAll──▶ actor ──spawn──▶ fetch task ── fetch_all().await
//!                       ▲                               │
//!                       └──────── ListingsFetched ──────┘
//! ```
//!
//! While a fetch is pending the actor keeps serving reads and writes. Two loads
//! of the same kind are not serialized: whichever fetch resolves last is applied
//! last, and its result is what the store ends up holding.
//!
//! The fetch task only holds a weak handle to the mailbox. Dropping every
//! [`ListingStoreClient`] therefore still shuts the actor down, even with
//! fetches in flight.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use super::client::ListingStoreClient;
use super::message::{LoadOutcome, StoreRequest};
use crate::catalog::{ListingCatalog, RecommendationPolicy};
use crate::fetch::ListingFetcher;
use crate::lifecycle::StoreConfig;

pub struct ListingStore {
    receiver: mpsc::Receiver<StoreRequest>,
    mailbox: mpsc::WeakSender<StoreRequest>,
    catalog: ListingCatalog,
    rng: Box<dyn RngCore + Send>,
}

impl ListingStore {
    /// Creates a new `ListingStore` and its associated `ListingStoreClient`.
    ///
    /// Padding draws use a `StdRng` seeded from `config.rng_seed`, or from OS
    /// entropy when no seed is configured.
    pub fn new(config: &StoreConfig) -> (Self, ListingStoreClient) {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config.buffer_size, config.policy.clone(), rng)
    }

    /// Creates a store drawing its padding order from `rng`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the mailbox. Must be non-zero.
    /// * `policy` - Recommendation target and tolerances.
    /// * `rng` - Randomness source for recommendation padding.
    pub fn with_rng(
        buffer_size: usize,
        policy: RecommendationPolicy,
        rng: impl RngCore + Send + 'static,
    ) -> (Self, ListingStoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            mailbox: sender.downgrade(),
            catalog: ListingCatalog::new(policy),
            rng: Box::new(rng),
        };
        let client = ListingStoreClient::new(sender);
        (actor, client)
    }

    /// Runs the store's event loop, processing messages until every client is gone.
    ///
    /// # Context Injection
    /// The fetcher is handed in here rather than at construction, so the store
    /// and its client can exist before the fetch source is wired up.
    pub async fn run(mut self, fetcher: Arc<dyn ListingFetcher>) {
        let policy = self.catalog.policy();
        info!(
            recommendation_target = policy.target,
            price_tolerance = policy.price_tolerance,
            size_tolerance = policy.size_tolerance,
            "Store started"
        );

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg, &fetcher);
        }

        info!(listings = self.catalog.listings().len(), "Shutdown");
    }

    fn handle(&mut self, msg: StoreRequest, fetcher: &Arc<dyn ListingFetcher>) {
        match msg {
            StoreRequest::LoadAll { respond_to } => {
                debug!("Load all");
                let fetcher = Arc::clone(fetcher);
                self.spawn_fetch(async move {
                    let result = fetcher.fetch_all().await;
                    StoreRequest::ListingsFetched { result, respond_to }
                });
            }
            StoreRequest::LoadOne { id, respond_to } => {
                debug!(%id, "Load one");
                let fetcher = Arc::clone(fetcher);
                self.spawn_fetch(async move {
                    let result = fetcher.fetch_one(&id).await;
                    StoreRequest::ListingFetched { id, result, respond_to }
                });
            }
            StoreRequest::ListingsFetched { result, respond_to } => {
                let outcome = match result {
                    Ok(listings) => {
                        let count = listings.len();
                        self.catalog.replace_listings(listings);
                        info!(count, "Listings replaced");
                        LoadOutcome::Applied { count }
                    }
                    Err(e) => {
                        error!(error = %e, "Failed to fetch listings");
                        LoadOutcome::Kept(e)
                    }
                };
                let _ = respond_to.send(outcome);
            }
            StoreRequest::ListingFetched { id, result, respond_to } => {
                let outcome = match result {
                    Ok(listing) => {
                        self.catalog.replace_current(listing);
                        info!(%id, "Current listing replaced");
                        LoadOutcome::Applied { count: 1 }
                    }
                    Err(e) => {
                        error!(%id, error = %e, "Failed to fetch listing");
                        LoadOutcome::Kept(e)
                    }
                };
                let _ = respond_to.send(outcome);
            }
            StoreRequest::SetSearchTerm { term, respond_to } => {
                debug!(%term, "Set search term");
                self.catalog.set_search_term(term);
                let _ = respond_to.send(());
            }
            StoreRequest::SetSortOption { option, respond_to } => {
                debug!(?option, "Set sort option");
                self.catalog.set_sort_option(option);
                let _ = respond_to.send(());
            }
            StoreRequest::ComputeRecommendations { criterion, respond_to } => {
                debug!(%criterion, "Compute recommendations");
                if self.catalog.compute_recommendations(&criterion, &mut *self.rng) {
                    info!(%criterion, count = self.catalog.recommendations().len(), "Recommendations computed");
                } else {
                    debug!("No current listing, recommendations unchanged");
                }
                let current = self.catalog.current_listing().cloned();
                let _ = respond_to.send((current, self.catalog.recommendations().to_vec()));
            }
            StoreRequest::GetListings { respond_to } => {
                let _ = respond_to.send(self.catalog.listings());
            }
            StoreRequest::GetCurrentListing { respond_to } => {
                let _ = respond_to.send(self.catalog.current_listing().cloned());
            }
            StoreRequest::GetSearchResults { respond_to } => {
                let _ = respond_to.send(self.catalog.search_results());
            }
            StoreRequest::GetSortedResults { respond_to } => {
                let _ = respond_to.send(self.catalog.sorted_results());
            }
            StoreRequest::GetRecommendations { respond_to } => {
                let _ = respond_to.send(self.catalog.recommendations().to_vec());
            }
            StoreRequest::GetSearchTerm { respond_to } => {
                let _ = respond_to.send(self.catalog.search_term().to_string());
            }
            StoreRequest::GetSortOption { respond_to } => {
                let _ = respond_to.send(self.catalog.sort_option());
            }
            StoreRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(self.catalog.snapshot());
            }
        }
    }

    /// Runs `fetch` on its own task and posts the message it produces back to the store.
    fn spawn_fetch<F>(&self, fetch: F)
    where
        F: Future<Output = StoreRequest> + Send + 'static,
    {
        let mailbox = self.mailbox.clone();
        tokio::spawn(async move {
            let message = fetch.await;
            let delivered = match mailbox.upgrade() {
                Some(sender) => sender.send(message).await.is_ok(),
                None => false,
            };
            if !delivered {
                warn!("Store stopped before the fetch result could be applied");
            }
        });
    }
}
