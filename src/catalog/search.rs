//! Free-text filtering of the catalog.

use std::sync::Arc;

use crate::model::Listing;

/// Returns the listings whose street, city or zip code contains `term`.
///
/// Street and city are compared case-insensitively. Zip codes are compared
/// as typed. An empty `term` returns the input collection itself (the same
/// shared slice, not a copy).
pub fn search(listings: &Arc<[Listing]>, term: &str) -> Arc<[Listing]> {
    if term.is_empty() {
        return Arc::clone(listings);
    }

    let needle = term.to_lowercase();
    listings
        .iter()
        .filter(|listing| matches(listing, &needle, term))
        .cloned()
        .collect()
}

fn matches(listing: &Listing, needle: &str, raw: &str) -> bool {
    let location = &listing.location;
    location.street.to_lowercase().contains(needle)
        || location.city.to_lowercase().contains(needle)
        || location.zip.contains(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Location;

    fn catalog() -> Arc<[Listing]> {
        vec![
            Listing::new(1i64, 300000.0, 120.0, Location::new("Main St", "Springfield", "90210")),
            Listing::new(2i64, 100000.0, 60.0, Location::new("Elm Road", "Shelbyville", "1234AB")),
            Listing::new(3i64, 200000.0, 90.0, Location::new("Oak Lane", "Capital City", "55555")),
        ]
        .into()
    }

    fn ids(results: &[Listing]) -> Vec<String> {
        results.iter().map(|l| l.id.to_string()).collect()
    }

    #[test]
    fn test_empty_term_returns_same_collection() {
        let listings = catalog();
        let results = search(&listings, "");
        assert!(Arc::ptr_eq(&listings, &results));
        assert_eq!(ids(&results), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_street_and_city_ignore_case() {
        let listings = catalog();
        assert_eq!(ids(&search(&listings, "MAIN")), vec!["1"]);
        assert_eq!(ids(&search(&listings, "shelby")), vec!["2"]);
        assert_eq!(ids(&search(&listings, "cItY")), vec!["3"]);
    }

    #[test]
    fn test_zip_substring_matches() {
        let listings = catalog();
        assert_eq!(ids(&search(&listings, "902")), vec!["1"]);
        assert!(search(&listings, "xyz").is_empty());
    }

    #[test]
    fn test_zip_is_matched_as_typed() {
        let listings = catalog();
        assert_eq!(ids(&search(&listings, "1234AB")), vec!["2"]);
        // Lowercased text can never hit the uppercase part of a zip code
        assert!(search(&listings, "34ab").is_empty());
    }

    #[test]
    fn test_matches_any_field_in_catalog_order() {
        let listings = catalog();
        // "la" only appears in "Oak Lane"
        assert_eq!(ids(&search(&listings, "la")), vec!["3"]);
        // "e" is in every street or city
        assert_eq!(ids(&search(&listings, "e")), vec!["1", "2", "3"]);
    }
}
