//! Types for snapshot persistence.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::product::Product;

/// The single key the snapshot is stored under.
pub const SNAPSHOT_KEY: &str = "vitrine_products_cache";

/// Current snapshot schema version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// The persisted cache envelope.
///
/// Fully replaced on every save, never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Creation/merge time, epoch milliseconds.
    pub timestamp_ms: i64,
    /// The cached product list.
    pub products: Vec<Product>,
    /// Schema version tag.
    pub version: u32,
}

impl Snapshot {
    /// Wrap a product list with the current time and schema version.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
            products,
            version: SNAPSHOT_VERSION,
        }
    }
}

/// Errors from the underlying key-value medium.
#[derive(Debug, Error)]
pub enum MediumError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage quota exceeded")]
    QuotaExceeded,

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
