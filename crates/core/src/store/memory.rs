//! In-memory storage medium.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{MediumError, StorageMedium};

/// Process-local key-value medium.
///
/// The default for tests and for running without a data directory.
#[derive(Debug, Default)]
pub struct MemoryMedium {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageMedium for MemoryMedium {
    fn get(&self, key: &str) -> Result<Option<String>, MediumError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| MediumError::Unavailable("poisoned lock".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), MediumError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| MediumError::Unavailable("poisoned lock".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
