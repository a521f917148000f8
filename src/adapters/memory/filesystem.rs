//! In-memory filesystem adapter.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::ports::filesystem::FileSystem;

/// Filesystem held in a shared map of path to contents.
///
/// Clones share storage. A read-only instance rejects every write, which
/// stands in for an unwritable output location.
#[derive(Clone, Default)]
pub struct MemoryFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    read_only: bool,
}

impl MemoryFileSystem {
    /// Creates an empty, writable filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle over the same files that refuses writes.
    #[must_use]
    pub fn read_only(&self) -> Self {
        Self { files: Arc::clone(&self.files), read_only: true }
    }

    /// Seeds a file, bypassing the read-only flag.
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        if let Ok(mut files) = self.files.lock() {
            files.insert(path.into(), contents.into());
        }
    }

    /// Returns the current contents of a file, if present.
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.lock().ok().and_then(|files| files.get(path).cloned())
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.get(path).ok_or_else(|| format!("File not found: {}", path.display()).into())
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.read_only {
            return Err(format!("Permission denied: {}", path.display()).into());
        }
        let mut files = self.files.lock().map_err(|_| "filesystem lock poisoned")?;
        files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
