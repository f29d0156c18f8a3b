//! Storage medium abstraction.

use super::MediumError;

/// A synchronous string-keyed key-value store.
///
/// This is the browser-local-storage shape: blocking get/set of string
/// values. Implementations must be cheap enough to call on the async
/// runtime without spawning blocking tasks (values are a single JSON
/// document).
pub trait StorageMedium: Send + Sync {
    /// Read the value stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, MediumError>;

    /// Write `value` under `key`, replacing any existing value.
    fn set(&self, key: &str, value: &str) -> Result<(), MediumError>;
}
