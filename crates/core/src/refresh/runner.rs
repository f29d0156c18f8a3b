//! Refresh runner implementation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures::future;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::fetcher::ProductFetcher;
use crate::product::Taxonomy;
use crate::store::SnapshotStore;

use super::config::RefreshConfig;
use super::policy::needs_update;
use super::types::{RefreshState, RefreshStatus};

/// Drives the crawl state machine and publishes progress to subscribers.
///
/// One instance is constructed at application start and shared by
/// reference; there is no module-level singleton.
pub struct RefreshOrchestrator {
    config: RefreshConfig,
    store: SnapshotStore,
    fetcher: Arc<dyn ProductFetcher>,
    taxonomy: Taxonomy,

    // Runtime state
    running: AtomicBool,
    state_tx: watch::Sender<RefreshState>,
}

impl RefreshOrchestrator {
    /// Create a new runner.
    pub fn new(
        config: RefreshConfig,
        store: SnapshotStore,
        fetcher: Arc<dyn ProductFetcher>,
        taxonomy: Taxonomy,
    ) -> Self {
        let (state_tx, _) = watch::channel(RefreshState::default());
        Self {
            config,
            store,
            fetcher,
            taxonomy,
            running: AtomicBool::new(false),
            state_tx,
        }
    }

    /// Subscribe to state changes.
    ///
    /// The receiver observes the current state immediately and every
    /// subsequent transition, in order.
    pub fn subscribe(&self) -> watch::Receiver<RefreshState> {
        self.state_tx.subscribe()
    }

    /// The current state.
    pub fn state(&self) -> RefreshState {
        self.state_tx.borrow().clone()
    }

    /// Whether a run is currently active.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Run the refresh state machine once.
    ///
    /// Idempotent entry point: a call while a run is already active is a
    /// no-op. Individual fetch failures are logged and skipped; the run
    /// always reaches `Complete`.
    pub async fn initialize(&self) {
        if self.running.swap(true, Ordering::SeqCst) {
            debug!("Refresh already running, ignoring initialize call");
            return;
        }

        self.run().await;

        self.running.store(false, Ordering::SeqCst);
    }

    async fn run(&self) {
        self.emit(RefreshStatus::Initializing, 0, String::new(), 0);

        let snapshot = self.store.load_snapshot();
        let have_products = snapshot
            .as_ref()
            .map(|s| !s.products.is_empty())
            .unwrap_or(false);
        let now_ms = chrono::Utc::now().timestamp_millis();
        let stale = needs_update(snapshot.as_ref(), now_ms, self.config.max_snapshot_age_ms);

        if have_products && !stale {
            info!("Snapshot is fresh, skipping crawl");
            self.emit(RefreshStatus::Complete, 100, String::new(), 0);
            return;
        }

        // An empty snapshot means a full foreground crawl: the caller is
        // expected to block on progress. A stale-but-populated snapshot
        // refreshes in the background and keeps the task text quiet.
        let foreground = !have_products;
        if foreground {
            info!("Snapshot empty or absent, starting full crawl");
        } else {
            info!("Snapshot stale, starting background refresh");
        }

        let mut tasks: Vec<(String, String)> = Vec::new();
        for category in &self.taxonomy {
            for sub in &category.sub_categories {
                tasks.push((category.name.clone(), sub.clone()));
            }
        }

        let total = tasks.len();
        let mut completed = 0usize;
        let mut found = 0usize;

        self.emit(RefreshStatus::Crawling, 0, String::new(), 0);

        for batch in tasks.chunks(self.config.batch_size.max(1)) {
            let fetches = batch.iter().map(|(category, sub)| {
                self.fetcher
                    .fetch(category, sub, self.config.products_per_task)
            });

            // Batch N+1 never starts before batch N fully settles.
            let results = future::join_all(fetches).await;

            for ((category, sub), result) in batch.iter().zip(results) {
                match result {
                    Ok(products) => {
                        debug!(
                            "Fetched {} products for {} / {}",
                            products.len(),
                            category,
                            sub
                        );
                        found += products.len();
                        // Merge immediately so partial progress is durable
                        // and visible to readers between batches.
                        self.store.merge(products);
                    }
                    Err(e) => {
                        // A failing task must not abort the run.
                        warn!("Fetch failed for {} / {}: {}", category, sub, e);
                    }
                }
            }

            completed += batch.len();
            let progress = percentage(completed, total);
            let current_task = if foreground {
                batch
                    .last()
                    .map(|(category, sub)| format!("{} / {}", category, sub))
                    .unwrap_or_default()
            } else {
                String::new()
            };
            self.emit(RefreshStatus::Crawling, progress, current_task, found);
        }

        info!("Crawl complete: {} products found across {} tasks", found, total);
        self.emit(RefreshStatus::Complete, 100, String::new(), found);
    }

    fn emit(&self, status: RefreshStatus, progress: u8, current_task: String, found: usize) {
        self.state_tx.send_replace(RefreshState {
            status,
            progress,
            current_task,
            total_products_found: found,
        });
    }
}

fn percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    (completed as f64 / total as f64 * 100.0).round() as u8
}
