//! Refresh configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the refresh runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Snapshot age beyond which a background refresh is required
    /// (milliseconds).
    #[serde(default = "default_max_snapshot_age")]
    pub max_snapshot_age_ms: i64,

    /// How many fetch tasks run concurrently per batch.
    /// The runner awaits the whole batch before starting the next.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// How many products to request per (category, subcategory) task.
    #[serde(default = "default_products_per_task")]
    pub products_per_task: usize,
}

fn default_max_snapshot_age() -> i64 {
    24 * 60 * 60 * 1000 // 24 hours
}

fn default_batch_size() -> usize {
    2
}

fn default_products_per_task() -> usize {
    10
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            max_snapshot_age_ms: default_max_snapshot_age(),
            batch_size: default_batch_size(),
            products_per_task: default_products_per_task(),
        }
    }
}
