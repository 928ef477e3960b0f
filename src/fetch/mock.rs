//! # Mock Fetcher
//!
//! Scripted [`ListingFetcher`] for tests.
//!
//! Queue the responses the store should see, hand a clone of the mock to the
//! store, then call [`MockFetcher::verify`] to check every response was used.
//!
//! ```ignore
//! let mock = MockFetcher::new();
//! mock.expect_fetch_all().return_ok(listings);
//! mock.expect_fetch_one(7i64).delayed(Duration::from_millis(20)).return_err(FetchError::NotFound(7i64.into()));
//!
//! let system = CatalogSystem::start(&config, Arc::new(mock.clone()));
//! // ... drive the store ...
//! mock.verify();
//! ```
//!
//! `fetch_all` expectations are consumed in the order they were queued.
//! `fetch_one` consumes the oldest expectation queued for the requested id,
//! so concurrent lookups of different ids do not depend on task scheduling.
//! A call with no matching expectation fails with [`FetchError::Network`] and
//! makes `verify` panic.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{FetchError, ListingFetcher};
use crate::model::{Listing, ListingId};

enum Expectation {
    FetchAll {
        delay: Option<Duration>,
        response: Result<Vec<Listing>, FetchError>,
    },
    FetchOne {
        id: ListingId,
        delay: Option<Duration>,
        response: Result<Listing, FetchError>,
    },
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    unexpected: Vec<String>,
    calls: usize,
}

/// A fetcher that replays queued responses.
#[derive(Clone, Default)]
pub struct MockFetcher {
    state: Arc<Mutex<MockState>>,
}

impl MockFetcher {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `fetch_all` call.
    pub fn expect_fetch_all(&self) -> FetchAllExpectationBuilder {
        FetchAllExpectationBuilder {
            delay: None,
            state: self.state.clone(),
        }
    }

    /// Expects a `fetch_one` call for `id`.
    pub fn expect_fetch_one(&self, id: impl Into<ListingId>) -> FetchOneExpectationBuilder {
        FetchOneExpectationBuilder {
            id: id.into(),
            delay: None,
            state: self.state.clone(),
        }
    }

    /// Number of fetch calls received so far, expected or not.
    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().calls
    }

    /// Verifies that all expectations were met and no unexpected call arrived.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.unexpected.is_empty() {
            panic!("Unexpected fetch calls: {:?}", state.unexpected);
        }
        if !state.expectations.is_empty() {
            panic!("Not all expectations were met. {} remaining", state.expectations.len());
        }
    }

    fn unexpected(&self, state: &mut MockState, call: String) -> FetchError {
        let error = FetchError::Network(format!("unexpected call: {}", call));
        state.unexpected.push(call);
        error
    }
}

#[async_trait]
impl ListingFetcher for MockFetcher {
    async fn fetch_all(&self) -> Result<Vec<Listing>, FetchError> {
        let next = {
            let mut state = self.state.lock().unwrap();
            state.calls += 1;
            let position = state
                .expectations
                .iter()
                .position(|e| matches!(e, Expectation::FetchAll { .. }));
            match position.and_then(|i| state.expectations.remove(i)) {
                Some(Expectation::FetchAll { delay, response }) => (delay, response),
                _ => return Err(self.unexpected(&mut state, "fetch_all".to_string())),
            }
        };

        let (delay, response) = next;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        response
    }

    async fn fetch_one(&self, id: &ListingId) -> Result<Listing, FetchError> {
        let next = {
            let mut state = self.state.lock().unwrap();
            state.calls += 1;
            let position = state
                .expectations
                .iter()
                .position(|e| matches!(e, Expectation::FetchOne { id: expected, .. } if expected == id));
            match position.and_then(|i| state.expectations.remove(i)) {
                Some(Expectation::FetchOne { delay, response, .. }) => (delay, response),
                _ => return Err(self.unexpected(&mut state, format!("fetch_one({})", id))),
            }
        };

        let (delay, response) = next;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        response
    }
}

/// Builder for `fetch_all` expectations.
pub struct FetchAllExpectationBuilder {
    delay: Option<Duration>,
    state: Arc<Mutex<MockState>>,
}

impl FetchAllExpectationBuilder {
    /// Holds the response back for `delay` before resolving.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, listings: Vec<Listing>) {
        self.push(Ok(listings));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FetchError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Vec<Listing>, FetchError>) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation::FetchAll {
            delay: self.delay,
            response,
        });
    }
}

/// Builder for `fetch_one` expectations.
pub struct FetchOneExpectationBuilder {
    id: ListingId,
    delay: Option<Duration>,
    state: Arc<Mutex<MockState>>,
}

impl FetchOneExpectationBuilder {
    /// Holds the response back for `delay` before resolving.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, listing: Listing) {
        self.push(Ok(listing));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FetchError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Listing, FetchError>) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation::FetchOne {
            id: self.id,
            delay: self.delay,
            response,
        });
    }
}
