//! Catalog service.
//!
//! Single owner of the shared cache state: wires the snapshot store and
//! refresh runner together and exposes the querying surface. Construct
//! one at application start and share it via `Arc` (dependency
//! injection, not a module-level singleton).

use std::sync::Arc;

use tokio::sync::watch;

use crate::fetcher::ProductFetcher;
use crate::pipeline::{self, FilterSpec, Page};
use crate::product::{Product, Taxonomy};
use crate::refresh::{RefreshConfig, RefreshOrchestrator, RefreshState};
use crate::store::{SnapshotStore, StorageMedium};

/// The catalog: cached product list plus background refresh.
pub struct Catalog {
    store: SnapshotStore,
    refresh: RefreshOrchestrator,
}

impl Catalog {
    /// Build a catalog over `medium`, refreshing through `fetcher`.
    pub fn new(
        config: RefreshConfig,
        medium: Arc<dyn StorageMedium>,
        fetcher: Arc<dyn ProductFetcher>,
        taxonomy: Taxonomy,
    ) -> Self {
        let store = SnapshotStore::new(medium);
        let refresh = RefreshOrchestrator::new(config, store.clone(), fetcher, taxonomy);
        Self { store, refresh }
    }

    /// Return the cached list, seeding the baseline when empty.
    ///
    /// Call once on startup before rendering anything.
    pub fn seed(&self) -> Vec<Product> {
        self.store.seed()
    }

    /// Current cached list, re-read from the store.
    ///
    /// Readers racing a concurrent merge observe either the old or the
    /// new snapshot, never a torn one.
    pub fn products(&self) -> Vec<Product> {
        self.store.load().unwrap_or_default()
    }

    /// Run the refresh state machine once; no-op while already running.
    pub async fn initialize(&self) {
        self.refresh.initialize().await;
    }

    /// Subscribe to refresh progress.
    pub fn subscribe(&self) -> watch::Receiver<RefreshState> {
        self.refresh.subscribe()
    }

    /// Current refresh state.
    pub fn refresh_state(&self) -> RefreshState {
        self.refresh.state()
    }

    /// Derive one page of visible products from the current cached list.
    pub fn query(&self, spec: &FilterSpec, page: usize) -> Page {
        pipeline::apply(&self.products(), spec, page)
    }
}
