//! Similarity-based recommendations for a single listing.
//!
//! Selection happens in two passes:
//!
//! 1. **Primary** - every other listing within the tolerance of the chosen
//!    [`Criterion`], in catalog order.
//! 2. **Padding** - when the primary pass found fewer than
//!    [`RecommendationPolicy::target`] listings, the rest is filled with a
//!    random draw from the listings not picked yet.
//!
//! The current listing is never recommended, and nothing is recommended twice.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Criterion, Listing};

/// Tunables for [`recommend`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationPolicy {
    /// Number of recommendations padding tries to reach.
    pub target: usize,
    /// Maximum price difference (exclusive) for [`Criterion::Price`].
    pub price_tolerance: f64,
    /// Maximum floor area difference (exclusive) for [`Criterion::Size`].
    pub size_tolerance: f64,
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self {
            target: 3,
            price_tolerance: 50_000.0,
            size_tolerance: 50.0,
        }
    }
}

impl RecommendationPolicy {
    fn is_similar(&self, criterion: &Criterion, current: &Listing, candidate: &Listing) -> bool {
        match criterion {
            Criterion::Price => (candidate.price - current.price).abs() < self.price_tolerance,
            Criterion::Size => (candidate.size - current.size).abs() < self.size_tolerance,
            Criterion::Other(_) => false,
        }
    }
}

/// Picks recommendations for `current` out of `listings`.
///
/// The result lists primary matches first (catalog order), then the padding
/// in draw order. It is shorter than the target only when the catalog runs
/// out of other listings.
pub fn recommend<R>(
    current: &Listing,
    listings: &[Listing],
    criterion: &Criterion,
    policy: &RecommendationPolicy,
    rng: &mut R,
) -> Vec<Listing>
where
    R: Rng + ?Sized,
{
    let (primary, mut pool): (Vec<&Listing>, Vec<&Listing>) = listings
        .iter()
        .filter(|candidate| candidate.id != current.id)
        .partition(|candidate| policy.is_similar(criterion, current, candidate));

    let missing = policy.target.saturating_sub(primary.len());
    pool.shuffle(rng);
    pool.truncate(missing);

    primary.into_iter().chain(pool).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ListingId, Location};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn listing(id: i64, price: f64, size: f64) -> Listing {
        Listing::new(id, price, size, Location::new("Main St", "Springfield", "90210"))
    }

    fn ids(listings: &[Listing]) -> Vec<ListingId> {
        listings.iter().map(|l| l.id.clone()).collect()
    }

    fn numbers(ids: &[i64]) -> Vec<ListingId> {
        ids.iter().map(|&id| ListingId::Number(id)).collect()
    }

    /// Ten listings 100k apart; only id 2 is within 50k of id 1.
    fn spread_catalog() -> Vec<Listing> {
        let mut listings = vec![listing(1, 100000.0, 100.0), listing(2, 120000.0, 400.0)];
        for id in 3..=10 {
            listings.push(listing(id, id as f64 * 100000.0, id as f64 * 100.0));
        }
        listings
    }

    #[test]
    fn test_primary_matches_by_price() {
        let listings = vec![
            listing(1, 200000.0, 100.0),
            listing(2, 240000.0, 100.0),
            listing(3, 160000.0, 100.0),
            listing(4, 150000.0, 100.0), // exactly 50k away: excluded
            listing(5, 249999.0, 100.0),
        ];
        let mut rng = StdRng::seed_from_u64(7);
        let result = recommend(&listings[0], &listings, &Criterion::Price, &RecommendationPolicy::default(), &mut rng);
        assert_eq!(ids(&result), numbers(&[2, 3, 5]));
    }

    #[test]
    fn test_primary_matches_by_size() {
        let listings = vec![
            listing(1, 100000.0, 100.0),
            listing(2, 900000.0, 149.0),
            listing(3, 900000.0, 51.0),
            listing(4, 100000.0, 150.0),
            listing(5, 100000.0, 60.0),
        ];
        let mut rng = StdRng::seed_from_u64(7);
        let result = recommend(&listings[0], &listings, &Criterion::Size, &RecommendationPolicy::default(), &mut rng);
        assert_eq!(ids(&result), numbers(&[2, 3, 5]));
    }

    #[test]
    fn test_primary_is_not_capped() {
        let listings: Vec<Listing> = (1..=6).map(|id| listing(id, 100000.0 + id as f64, 80.0)).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let result = recommend(&listings[0], &listings, &Criterion::Price, &RecommendationPolicy::default(), &mut rng);
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_padding_reaches_target_without_duplicates() {
        let listings = spread_catalog();
        let current = listings[0].clone();

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = recommend(&current, &listings, &Criterion::Price, &RecommendationPolicy::default(), &mut rng);

            assert_eq!(result.len(), 3);
            assert_eq!(result[0].id, ListingId::Number(2), "primary match comes first");

            let padded: HashSet<ListingId> = result[1..].iter().map(|l| l.id.clone()).collect();
            assert_eq!(padded.len(), 2, "padding must not repeat a listing");
            for id in &padded {
                assert!(!matches!(id, ListingId::Number(1) | ListingId::Number(2)));
            }
        }
    }

    #[test]
    fn test_padding_is_deterministic_for_a_seed() {
        let listings = spread_catalog();
        let policy = RecommendationPolicy::default();

        let first = recommend(&listings[0], &listings, &Criterion::Price, &policy, &mut StdRng::seed_from_u64(42));
        let second = recommend(&listings[0], &listings, &Criterion::Price, &policy, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_never_recommends_current() {
        let listings = spread_catalog();
        let policy = RecommendationPolicy::default();
        let criteria = [Criterion::Price, Criterion::Size, Criterion::Other("rooms".into())];

        for current in &listings {
            for criterion in &criteria {
                let mut rng = StdRng::seed_from_u64(3);
                let result = recommend(current, &listings, criterion, &policy, &mut rng);
                assert!(result.iter().all(|l| l.id != current.id));
            }
        }
    }

    #[test]
    fn test_unknown_criterion_pads_only() {
        let listings = spread_catalog();
        let mut rng = StdRng::seed_from_u64(11);
        let result = recommend(
            &listings[0],
            &listings,
            &Criterion::Other("bedrooms".into()),
            &RecommendationPolicy::default(),
            &mut rng,
        );
        assert_eq!(result.len(), 3);
        let unique: HashSet<ListingId> = ids(&result).into_iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_small_catalog_falls_short() {
        let policy = RecommendationPolicy::default();
        let mut rng = StdRng::seed_from_u64(1);

        let pair = vec![listing(1, 100000.0, 50.0), listing(2, 900000.0, 900.0)];
        let result = recommend(&pair[0], &pair, &Criterion::Price, &policy, &mut rng);
        assert_eq!(ids(&result), numbers(&[2]));

        let alone = vec![listing(1, 100000.0, 50.0)];
        assert!(recommend(&alone[0], &alone, &Criterion::Price, &policy, &mut rng).is_empty());
        assert!(recommend(&alone[0], &[], &Criterion::Size, &policy, &mut rng).is_empty());
    }
}
