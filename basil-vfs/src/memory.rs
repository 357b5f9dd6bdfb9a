//! In-memory file system implementation

use crate::error::{VfsError, VfsResult};
use crate::VirtualFileSystem;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// An in-memory file system.
///
/// Files live in a `BTreeMap` keyed by normalized path, which makes it the
/// natural backend for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryFileSystem {
    /// Create a new empty memory file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory file system pre-populated with files.
    pub fn with_files<I, P, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: AsRef<Path>,
        C: AsRef<[u8]>,
    {
        let fs = Self::new();
        for (path, content) in files {
            fs.insert(path.as_ref(), content.as_ref());
        }
        fs
    }

    /// Add or replace a file.
    pub fn insert(&self, path: &Path, content: &[u8]) {
        let key = normalize_path(path);
        // A poisoned lock still holds a consistent map; writes are single inserts.
        let mut files = self.files.write().unwrap_or_else(|e| e.into_inner());
        files.insert(key, content.to_vec());
    }

    /// Number of stored files.
    pub fn len(&self) -> usize {
        self.files.read().map(|f| f.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Forward slashes everywhere so Windows-style test paths resolve too.
fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

impl VirtualFileSystem for MemoryFileSystem {
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>> {
        let key = normalize_path(path);
        let files = self.files.read().map_err(|_| VfsError::Io {
            path: key.clone(),
            message: "lock poisoned".to_string(),
        })?;
        files
            .get(&key)
            .cloned()
            .ok_or(VfsError::NotFound { path: key })
    }

    fn exists(&self, path: &Path) -> bool {
        let key = normalize_path(path);
        self.files
            .read()
            .map(|f| f.contains_key(&key))
            .unwrap_or(false)
    }

    fn is_file(&self, path: &Path) -> bool {
        // no directories in memory
        self.exists(path)
    }
}
