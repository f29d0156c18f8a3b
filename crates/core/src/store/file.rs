//! File-backed storage medium.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::{MediumError, StorageMedium};

/// Key-value medium storing each key as a JSON file under a directory.
///
/// Writes go through a temp file + rename so a crash mid-write leaves
/// the previous value intact.
#[derive(Debug, Clone)]
pub struct FileMedium {
    dir: PathBuf,
}

impl FileMedium {
    /// Create a medium rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, MediumError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are internal constants, not user input, but keep them
        // filesystem-safe anyway.
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", safe))
    }
}

impl StorageMedium for FileMedium {
    fn get(&self, key: &str) -> Result<Option<String>, MediumError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), MediumError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| {
            if e.kind() == ErrorKind::StorageFull {
                MediumError::QuotaExceeded
            } else {
                MediumError::Io(e)
            }
        })?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
