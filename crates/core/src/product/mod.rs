//! Product catalog entities.
//!
//! A [`Product`] is the unit the whole crate revolves around: the snapshot
//! store persists lists of them, the refresh runner fetches new ones, and
//! the pipeline filters and sorts them.

mod baseline;
mod taxonomy;
mod types;

pub use baseline::baseline_products;
pub use taxonomy::{default_taxonomy, CategorySpec, Taxonomy};
pub use types::{PricingTier, Product};
