//! Error types for the listing fetch service.

use thiserror::Error;

use crate::model::ListingId;

/// Errors a [`ListingFetcher`](super::ListingFetcher) may report.
///
/// The store treats every variant the same way: it logs the failure and keeps
/// its previous state.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    /// The remote source could not be reached.
    #[error("Network error: {0}")]
    Network(String),

    /// The remote source answered with a non-success status.
    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    /// No listing exists with the requested id.
    #[error("Listing not found: {0}")]
    NotFound(ListingId),

    /// The response body could not be read as listings.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Malformed(e.to_string())
    }
}
