//! Snapshot store over a storage medium.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::product::{baseline_products, Product};

use super::{Snapshot, StorageMedium, SNAPSHOT_KEY};

/// Durable cache of the product list.
///
/// All operations favor availability over strict durability: decode and
/// write failures are logged and the caller continues with whatever list
/// is in memory.
#[derive(Clone)]
pub struct SnapshotStore {
    medium: Arc<dyn StorageMedium>,
}

impl SnapshotStore {
    pub fn new(medium: Arc<dyn StorageMedium>) -> Self {
        Self { medium }
    }

    /// Load the persisted envelope, if any.
    ///
    /// Returns `None` when the key is absent, the value fails to parse,
    /// or the medium errors. The fallback path is explicit here instead
    /// of being implied by a caught exception.
    pub fn load_snapshot(&self) -> Option<Snapshot> {
        let raw = match self.medium.get(SNAPSHOT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read snapshot: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<Snapshot>(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!("Discarding unparsable snapshot: {}", e);
                None
            }
        }
    }

    /// Load the cached product list, `None` if no usable snapshot exists.
    pub fn load(&self) -> Option<Vec<Product>> {
        self.load_snapshot().map(|s| s.products)
    }

    /// Persist `products` under a fresh timestamp.
    ///
    /// Write failures are swallowed: the cache simply stays stale.
    pub fn save(&self, products: &[Product]) {
        let snapshot = Snapshot::new(products.to_vec());
        let raw = match serde_json::to_string(&snapshot) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to serialize snapshot: {}", e);
                return;
            }
        };
        if let Err(e) = self.medium.set(SNAPSHOT_KEY, &raw) {
            warn!("Failed to persist snapshot: {}", e);
        }
    }

    /// Return the cached list, seeding the baseline dataset if the cache
    /// is absent or empty.
    pub fn seed(&self) -> Vec<Product> {
        match self.load() {
            Some(products) if !products.is_empty() => products,
            _ => {
                let baseline = baseline_products();
                debug!("Seeding baseline dataset: {} products", baseline.len());
                self.save(&baseline);
                baseline
            }
        }
    }

    /// Merge `incoming` into the cached list, last-write-wins by id.
    ///
    /// Existing records keep their relative order; genuinely new records
    /// append in their incoming order. Persists and returns the merged
    /// list.
    pub fn merge(&self, incoming: Vec<Product>) -> Vec<Product> {
        let current = self.load().unwrap_or_default();

        // Insertion-ordered identity map: current first, incoming
        // overwrites same-id entries in place.
        let mut order: Vec<String> = Vec::with_capacity(current.len() + incoming.len());
        let mut by_id: std::collections::HashMap<String, Product> =
            std::collections::HashMap::with_capacity(current.len() + incoming.len());

        for product in current.into_iter().chain(incoming) {
            if !by_id.contains_key(&product.id) {
                order.push(product.id.clone());
            }
            by_id.insert(product.id.clone(), product);
        }

        let merged: Vec<Product> = order
            .into_iter()
            .filter_map(|id| by_id.remove(&id))
            .collect();

        self.save(&merged);
        merged
    }
}
