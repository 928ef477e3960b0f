use std::sync::Arc;
use tracing::{error, info};

use super::StoreConfig;
use crate::fetch::ListingFetcher;
use crate::store::{ListingStore, ListingStoreClient};

/// The runtime orchestrator for a catalog session.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: starting the store actor and stopping it again
/// - **Dependency Wiring**: handing the fetch source to the store
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::start(&StoreConfig::from_env()?, Arc::new(fetcher));
///
/// system.store.load_all().await?;
/// let results = system.store.sorted_results().await?;
///
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Client for interacting with the listing store
    pub store: ListingStoreClient,

    /// Task handle of the running store (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    /// Creates the store and starts it with `fetcher` as its listing source.
    pub fn start(config: &StoreConfig, fetcher: Arc<dyn ListingFetcher>) -> Self {
        let (store_actor, store) = ListingStore::new(config);
        let handle = tokio::spawn(store_actor.run(fetcher));
        Self { store, handle }
    }

    /// Gracefully shuts down the store.
    ///
    /// Drops this system's client and waits for the store task to finish.
    /// Clones of the client handed out earlier keep the store alive, so drop
    /// those first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the store shut down cleanly
    /// - `Err(String)` if the store task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog...");

        // Closing the last sender ends the store's event loop
        drop(self.store);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
