//! Snapshot persistence.
//!
//! The store is a cache, not a system of record: every read/write failure
//! degrades to "no snapshot" or "unchanged state" instead of propagating.

mod file;
mod medium;
mod memory;
mod snapshot;
mod types;

pub use file::FileMedium;
pub use medium::StorageMedium;
pub use memory::MemoryMedium;
pub use snapshot::SnapshotStore;
pub use types::{MediumError, Snapshot, SNAPSHOT_KEY, SNAPSHOT_VERSION};
