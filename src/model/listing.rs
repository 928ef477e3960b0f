use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use std::fmt::Display;

/// Identifier of a listing. The API hands out either numbers or strings.
///
/// Two ids are equal only if they have the same representation:
/// `ListingId::Number(1)` and `ListingId::Text("1")` are different listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListingId {
    Number(i64),
    Text(String),
}

impl From<i64> for ListingId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for ListingId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for ListingId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{}", id),
            Self::Text(id) => write!(f, "{}", id),
        }
    }
}

/// Postal location of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub street: String,
    pub city: String,
    pub zip: String,
    /// Remaining location fields (house number, addition, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Location {
    pub fn new(street: impl Into<String>, city: impl Into<String>, zip: impl Into<String>) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            zip: zip.into(),
            extra: Map::new(),
        }
    }
}

/// Represents a single real-estate listing as returned by the listing API.
///
/// # Catalog
/// Only `id`, `price`, `size` and `location` are read by the catalog.
/// Every other attribute of the record (images, descriptions, room counts, ...)
/// is kept in [`Listing::attributes`] and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub price: f64,
    pub size: f64,
    pub location: Location,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Listing {
    /// Creates a new Listing with no display attributes.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the listing API
    /// * `price` - Asking price
    /// * `size` - Floor area
    /// * `location` - Street, city and zip code
    pub fn new(id: impl Into<ListingId>, price: f64, size: f64, location: Location) -> Self {
        Self {
            id: id.into(),
            price,
            size,
            location,
            attributes: Map::new(),
        }
    }

    /// Attaches an opaque display attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}
