use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use thiserror::Error;

use crate::catalog::RecommendationPolicy;

/// Errors raised while reading [`StoreConfig`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Store configuration loaded from environment variables.
///
/// | Variable                        | Default  |
/// |---------------------------------|----------|
/// | `LISTING_STORE_BUFFER`          | `32`     |
/// | `LISTING_RECOMMENDATION_TARGET` | `3`      |
/// | `LISTING_PRICE_TOLERANCE`       | `50000`  |
/// | `LISTING_SIZE_TOLERANCE`        | `50`     |
/// | `LISTING_RNG_SEED`              | (unset: seeded from OS entropy) |
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Capacity of the store's mailbox.
    pub buffer_size: usize,
    pub policy: RecommendationPolicy,
    /// Fixed seed for recommendation padding. Makes padding reproducible.
    pub rng_seed: Option<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            policy: RecommendationPolicy::default(),
            rng_seed: None,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let buffer_size = parse(&lookup, "LISTING_STORE_BUFFER")?.unwrap_or(defaults.buffer_size);
        if buffer_size == 0 {
            return Err(ConfigError::Invalid {
                key: "LISTING_STORE_BUFFER",
                value: "0".to_string(),
            });
        }

        let policy = RecommendationPolicy {
            target: parse(&lookup, "LISTING_RECOMMENDATION_TARGET")?.unwrap_or(defaults.policy.target),
            price_tolerance: parse(&lookup, "LISTING_PRICE_TOLERANCE")?
                .unwrap_or(defaults.policy.price_tolerance),
            size_tolerance: parse(&lookup, "LISTING_SIZE_TOLERANCE")?
                .unwrap_or(defaults.policy.size_tolerance),
        };

        Ok(Self {
            buffer_size,
            policy,
            rng_seed: parse(&lookup, "LISTING_RNG_SEED")?,
        })
    }
}

fn parse<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
