//! Native file system implementation

use crate::error::{VfsError, VfsResult};
use crate::VirtualFileSystem;
use std::path::Path;
use tracing::debug;

/// Wraps `std::fs` behind the `VirtualFileSystem` interface.
#[derive(Debug, Clone, Default)]
pub struct NativeFileSystem {}

impl NativeFileSystem {
    pub fn new() -> Self {
        Self {}
    }
}

impl VirtualFileSystem for NativeFileSystem {
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>> {
        let shown = path.to_string_lossy();
        if path.is_dir() {
            return Err(VfsError::NotAFile {
                path: shown.to_string(),
            });
        }
        let bytes = std::fs::read(path).map_err(|e| VfsError::from_io(&shown, e))?;
        debug!(target: "basil::vfs", path = %shown, bytes = bytes.len(), "read file");
        Ok(bytes)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}
