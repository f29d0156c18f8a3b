//! Mock storage medium with fault injection.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::store::{MediumError, StorageMedium};

/// In-memory medium that can simulate read/write failures.
#[derive(Debug, Default)]
pub struct MockMedium {
    entries: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl MockMedium {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent reads fail as unavailable.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent writes fail with a quota error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of reads attempted.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of writes attempted.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Put a raw value directly, bypassing fault injection.
    pub fn put_raw(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("mock medium lock")
            .insert(key.to_string(), value.to_string());
    }
}

impl StorageMedium for MockMedium {
    fn get(&self, key: &str) -> Result<Option<String>, MediumError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(MediumError::Unavailable("injected read failure".to_string()));
        }
        Ok(self
            .entries
            .lock()
            .expect("mock medium lock")
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), MediumError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(MediumError::QuotaExceeded);
        }
        self.entries
            .lock()
            .expect("mock medium lock")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
