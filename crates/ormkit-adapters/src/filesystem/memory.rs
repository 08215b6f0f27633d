//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use ormkit_core::{
    application::ports::Filesystem,
    error::{CoreError, CoreResult},
};

/// In-memory filesystem for testing.
///
/// Mirrors the one rule of the real adapter that matters here: a write into
/// a directory that was never created fails.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    // Maps are never left half-updated; poisoning is ignored.
    fn lock_read(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_write(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register `path` and all its ancestors as existing directories.
    pub fn create_dir_all(&self, path: impl AsRef<Path>) {
        let mut inner = self.lock_write();
        let mut current = PathBuf::new();
        for component in path.as_ref().components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lock_read().files.get(&normalize(path.as_ref())).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.lock_read().files.keys().cloned().collect()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        let path = normalize(path);
        let mut inner = self.lock_write();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(CoreError::Filesystem {
                    path,
                    reason: "Parent directory does not exist".into(),
                });
            }
        }

        inner.files.insert(path, content.to_string());
        Ok(())
    }
}

// Collapse "a//b" into "a/b" so lookups match however the path was built.
fn normalize(path: &Path) -> PathBuf {
    path.components().collect()
}
