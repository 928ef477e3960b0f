//! Pure data structures: the [`Listing`] record and the selectors that drive
//! the catalog's derived views.

pub mod listing;
pub mod options;

pub use listing::*;
pub use options::*;
