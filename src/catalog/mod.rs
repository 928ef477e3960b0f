//! # Listing Catalog
//!
//! The state container behind the catalog pages, and the derivations it offers.
//!
//! ## State
//!
//! | Field             | Written by                                        |
//! |-------------------|---------------------------------------------------|
//! | `listings`        | [`ListingCatalog::replace_listings`] (whole set)  |
//! | `current`         | [`ListingCatalog::replace_current`]               |
//! | `search_term`     | [`ListingCatalog::set_search_term`]               |
//! | `sort_option`     | [`ListingCatalog::set_sort_option`]               |
//! | `recommendations` | [`ListingCatalog::compute_recommendations`]       |
//!
//! ## Derived Views
//!
//! [`ListingCatalog::search_results`] and [`ListingCatalog::sorted_results`] are
//! recomputed from the fields above on every call. Nothing is cached, so there
//! is nothing to invalidate: a write is visible to the very next read.
//!
//! Recommendations are the exception. They are stored, and only change when
//! [`ListingCatalog::compute_recommendations`] runs again. Reloading the
//! listings does not refresh them.
//!
//! The catalog itself is plain synchronous data. Sharing it between tasks is the
//! job of the [`store`](crate::store) actor.

pub mod recommend;
pub mod search;
pub mod sort;

pub use recommend::{recommend, RecommendationPolicy};
pub use search::search;
pub use sort::sort;

use rand::Rng;
use std::sync::Arc;

use crate::model::{Criterion, Listing, SortOption};

/// In-memory state of one catalog session.
#[derive(Debug, Clone)]
pub struct ListingCatalog {
    listings: Arc<[Listing]>,
    current: Option<Listing>,
    search_term: String,
    sort_option: SortOption,
    recommendations: Vec<Listing>,
    policy: RecommendationPolicy,
}

impl Default for ListingCatalog {
    fn default() -> Self {
        Self::new(RecommendationPolicy::default())
    }
}

impl ListingCatalog {
    /// Creates an empty catalog: no listings, no current listing, no filter.
    pub fn new(policy: RecommendationPolicy) -> Self {
        Self {
            listings: Arc::from(Vec::new()),
            current: None,
            search_term: String::new(),
            sort_option: SortOption::Unordered,
            recommendations: Vec::new(),
            policy,
        }
    }

    // --- State ---

    pub fn listings(&self) -> Arc<[Listing]> {
        Arc::clone(&self.listings)
    }

    pub fn current_listing(&self) -> Option<&Listing> {
        self.current.as_ref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_option(&self) -> SortOption {
        self.sort_option
    }

    pub fn recommendations(&self) -> &[Listing] {
        &self.recommendations
    }

    pub fn policy(&self) -> &RecommendationPolicy {
        &self.policy
    }

    /// Replaces the whole listing set. Previous contents are discarded, not merged.
    pub fn replace_listings(&mut self, listings: Vec<Listing>) {
        self.listings = listings.into();
    }

    pub fn replace_current(&mut self, listing: Listing) {
        self.current = Some(listing);
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_sort_option(&mut self, option: SortOption) {
        self.sort_option = option;
    }

    // --- Derived views ---

    /// Listings matching the search term. See [`search()`].
    pub fn search_results(&self) -> Arc<[Listing]> {
        search(&self.listings, &self.search_term)
    }

    /// Search results in the selected order. See [`sort()`].
    pub fn sorted_results(&self) -> Vec<Listing> {
        sort(&self.search_results(), self.sort_option)
    }

    /// Recomputes the recommendations for the current listing.
    ///
    /// Does nothing and returns `false` when no listing is current. Otherwise
    /// the stored recommendations are replaced and `true` is returned.
    pub fn compute_recommendations<R>(&mut self, criterion: &Criterion, rng: &mut R) -> bool
    where
        R: Rng + ?Sized,
    {
        let Some(current) = &self.current else {
            return false;
        };
        self.recommendations = recommend(current, &self.listings, criterion, &self.policy, rng);
        true
    }

    /// Captures every field and derived view at this instant.
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            listings: self.listings(),
            current_listing: self.current.clone(),
            search_term: self.search_term.clone(),
            sort_option: self.sort_option,
            search_results: self.search_results(),
            sorted_results: self.sorted_results(),
            recommendations: self.recommendations.clone(),
        }
    }
}

/// A consistent copy of the catalog, state and derived views together.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub listings: Arc<[Listing]>,
    pub current_listing: Option<Listing>,
    pub search_term: String,
    pub sort_option: SortOption,
    pub search_results: Arc<[Listing]>,
    pub sorted_results: Vec<Listing>,
    pub recommendations: Vec<Listing>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ListingId, Location};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn listing(id: i64, price: f64, size: f64, street: &str, city: &str, zip: &str) -> Listing {
        Listing::new(id, price, size, Location::new(street, city, zip))
    }

    fn loaded() -> ListingCatalog {
        let mut catalog = ListingCatalog::default();
        catalog.replace_listings(vec![
            listing(1, 300000.0, 120.0, "Main St", "Springfield", "90210"),
            listing(2, 100000.0, 60.0, "Main St", "Shelbyville", "90211"),
            listing(3, 200000.0, 90.0, "Oak Lane", "Springfield", "90212"),
        ]);
        catalog
    }

    fn ids(listings: &[Listing]) -> Vec<String> {
        listings.iter().map(|l| l.id.to_string()).collect()
    }

    #[test]
    fn test_new_catalog_is_empty() {
        let catalog = ListingCatalog::default();
        assert!(catalog.listings().is_empty());
        assert!(catalog.current_listing().is_none());
        assert_eq!(catalog.search_term(), "");
        assert_eq!(catalog.sort_option(), SortOption::Unordered);
        assert!(catalog.recommendations().is_empty());
        assert!(catalog.sorted_results().is_empty());
    }

    #[test]
    fn test_catalog_uses_its_policy() {
        let policy = RecommendationPolicy {
            target: 1,
            ..RecommendationPolicy::default()
        };
        let mut catalog = ListingCatalog::new(policy.clone());
        assert_eq!(catalog.policy(), &policy);

        catalog.replace_listings(loaded().listings().to_vec());
        catalog.replace_current(listing(4, 5000000.0, 500.0, "Hill Road", "Ogdenville", "11111"));
        assert!(catalog.compute_recommendations(&Criterion::Price, &mut StdRng::seed_from_u64(1)));
        assert_eq!(catalog.recommendations().len(), 1);
    }

    #[test]
    fn test_views_follow_writes() {
        let mut catalog = loaded();
        assert_eq!(ids(&catalog.sorted_results()), vec!["1", "2", "3"]);

        catalog.set_sort_option(SortOption::Price);
        assert_eq!(ids(&catalog.sorted_results()), vec!["2", "3", "1"]);

        catalog.set_search_term("main");
        assert_eq!(ids(&catalog.search_results()), vec!["1", "2"]);
        assert_eq!(ids(&catalog.sorted_results()), vec!["2", "1"]);

        catalog.set_sort_option(SortOption::Unordered);
        assert_eq!(ids(&catalog.sorted_results()), vec!["1", "2"]);

        // Source order survives every sort
        assert_eq!(ids(&catalog.listings()), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_reload_replaces_instead_of_merging() {
        let mut catalog = loaded();
        catalog.replace_listings(vec![listing(9, 1.0, 1.0, "New St", "Elsewhere", "00000")]);
        assert_eq!(ids(&catalog.listings()), vec!["9"]);
    }

    #[test]
    fn test_recommendations_need_a_current_listing() {
        let mut catalog = loaded();
        let mut rng = StdRng::seed_from_u64(5);
        assert!(!catalog.compute_recommendations(&Criterion::Price, &mut rng));
        assert!(catalog.recommendations().is_empty());
    }

    #[test]
    fn test_recommendations_are_not_refreshed_by_reload() {
        let mut catalog = loaded();
        let mut rng = StdRng::seed_from_u64(5);
        catalog.replace_current(listing(3, 200000.0, 90.0, "Oak Lane", "Springfield", "90212"));

        assert!(catalog.compute_recommendations(&Criterion::Price, &mut rng));
        let before = catalog.recommendations().to_vec();
        assert_eq!(before.len(), 2);
        assert!(before.iter().all(|l| l.id != ListingId::Number(3)));

        catalog.replace_listings(Vec::new());
        assert_eq!(catalog.recommendations(), before.as_slice());
    }

    #[test]
    fn test_snapshot_is_consistent() {
        let mut catalog = loaded();
        catalog.set_search_term("springfield");
        catalog.set_sort_option(SortOption::Size);

        let snapshot = catalog.snapshot();
        assert_eq!(snapshot.listings.len(), 3);
        assert_eq!(ids(&snapshot.search_results), vec!["1", "3"]);
        assert_eq!(ids(&snapshot.sorted_results), vec!["3", "1"]);
        assert_eq!(snapshot.search_term, "springfield");
        assert_eq!(snapshot.sort_option, SortOption::Size);
    }
}
