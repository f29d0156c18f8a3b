//! Product fetch abstraction.
//!
//! The refresh runner asks a [`ProductFetcher`] for new records one
//! (category, subcategory) pair at a time. Real implementations sit in
//! front of whatever discovery backend the application uses; the crate
//! only depends on the trait.

mod types;

pub use types::{FetchError, ProductFetcher};
