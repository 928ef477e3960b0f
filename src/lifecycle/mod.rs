//! # Session Lifecycle
//!
//! Starting, configuring and stopping a catalog session.
//!
//! ## Components
//!
//! - [`CatalogSystem`] - spawns the [`ListingStore`](crate::store::ListingStore),
//!   injects its fetch source and shuts it down again.
//! - [`StoreConfig`] - mailbox size, recommendation tuning and RNG seed,
//!   read from the environment.
//! - [`setup_tracing`] - installs the log subscriber.
//!
//! ## Late Binding
//!
//! The store is created without a fetch source. The fetcher is passed to
//! [`ListingStore::run`](crate::store::ListingStore::run) when the store task
//! starts, so the client can be handed out before the source is known:
//!
//! ```rust,ignore
//! let (store_actor, client) = ListingStore::new(&config);
//! let handle = tokio::spawn(store_actor.run(fetcher));
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the store's mailbox
//! 2. **Store detects closure** - `receiver.recv()` returns `None`
//! 3. **Store logs its final state** and the task ends
//! 4. **Await completion** - [`CatalogSystem::shutdown`] waits for the task
//!
//! Fetches still in flight at that point are dropped: they only hold a weak
//! handle to the mailbox and find it closed when they resolve.

pub mod catalog_system;
pub mod config;
pub mod tracing;

pub use self::catalog_system::*;
pub use self::config::*;
pub use self::tracing::*;
