//! Catalog refresh.
//!
//! The refresh runner drives the crawl state machine:
//! - **Fresh snapshot**: no work, jump straight to `Complete`.
//! - **Empty/absent snapshot**: foreground full crawl, per-batch task text.
//! - **Stale snapshot**: background crawl over the same task loop.
//!
//! Fetches run in fixed-size batches so concurrent calls to the fetch
//! backend stay bounded; each task's results are merged into the snapshot
//! store immediately so partial progress survives interruption.

mod config;
mod policy;
mod runner;
mod types;

pub use config::RefreshConfig;
pub use policy::needs_update;
pub use runner::RefreshOrchestrator;
pub use types::{RefreshState, RefreshStatus};
