//! # Store Errors
//!
//! Failures of the store machinery itself. A failed fetch is not one of them:
//! fetch failures are absorbed by the store and surface as
//! [`LoadOutcome::Kept`](super::LoadOutcome::Kept).

/// Errors returned by [`ListingStoreClient`](super::ListingStoreClient).
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
}
