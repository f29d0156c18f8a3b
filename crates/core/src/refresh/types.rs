//! Types for the refresh runner.

use serde::{Deserialize, Serialize};

/// Refresh run status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RefreshStatus {
    /// No run has started yet.
    #[default]
    Idle,
    /// A run has started and is evaluating the snapshot.
    Initializing,
    /// Fetch tasks are executing.
    Crawling,
    /// The last run finished (whether or not it found anything).
    Complete,
    /// Part of the state contract for subscribers; the current runner
    /// swallows per-task failures and does not reach this state itself.
    Error,
}

/// State emitted to subscribers after every transition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefreshState {
    /// Current status.
    pub status: RefreshStatus,
    /// Completed share of the task list, 0-100.
    pub progress: u8,
    /// Human-readable description of the batch in flight. Empty during
    /// background runs, where the UI keeps showing stale data.
    pub current_task: String,
    /// Products fetched so far in this run.
    pub total_products_found: usize,
}
