//! Selectors for the sorted view and for recommendations.
//!
//! Both selectors arrive as free text from the view layer (a `<select>` value,
//! a query parameter). Parsing never fails: text that does not name a known
//! option maps to the "no effect" variant.

use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

/// Ordering applied to the search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOption {
    /// Keep the catalog order. Selected by `""` and by any unknown text.
    #[default]
    Unordered,
    /// Ascending by price.
    Price,
    /// Ascending by floor area.
    Size,
}

impl FromStr for SortOption {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "price" => Self::Price,
            "size" => Self::Size,
            _ => Self::Unordered,
        })
    }
}

impl From<&str> for SortOption {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(option) => option,
            Err(never) => match never {},
        }
    }
}

impl Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unordered => write!(f, ""),
            Self::Price => write!(f, "price"),
            Self::Size => write!(f, "size"),
        }
    }
}

/// Similarity measure used to pick recommendations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Criterion {
    /// Listings priced close to the current one.
    #[default]
    Price,
    /// Listings with a floor area close to the current one.
    Size,
    /// Unknown criterion. Matches nothing, so every recommendation is padding.
    Other(String),
}

impl From<&str> for Criterion {
    fn from(s: &str) -> Self {
        match s {
            "price" => Self::Price,
            "size" => Self::Size,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Price => write!(f, "price"),
            Self::Size => write!(f, "size"),
            Self::Other(name) => write!(f, "{}", name),
        }
    }
}
