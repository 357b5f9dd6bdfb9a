//! VFS Error Types

use thiserror::Error;

/// Result type for VFS operations
pub type VfsResult<T> = Result<T, VfsError>;

/// Error type for VFS operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VfsError {
    /// Nothing exists at the path
    #[error("Path not found: {path}")]
    NotFound { path: String },

    /// The path exists but is not a regular file
    #[error("Not a file: {path}")]
    NotAFile { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// File contents are not valid UTF-8
    #[error("Invalid UTF-8 in '{path}' at byte {offset}")]
    InvalidUtf8 { path: String, offset: usize },

    #[error("IO error on '{path}': {message}")]
    Io { path: String, message: String },
}

impl VfsError {
    /// The path the failed operation was about
    pub fn path(&self) -> &str {
        match self {
            VfsError::NotFound { path }
            | VfsError::NotAFile { path }
            | VfsError::PermissionDenied { path }
            | VfsError::InvalidUtf8 { path, .. }
            | VfsError::Io { path, .. } => path,
        }
    }

    /// True when the path does not name a readable file
    pub fn is_not_found(&self) -> bool {
        matches!(self, VfsError::NotFound { .. } | VfsError::NotAFile { .. })
    }

    pub(crate) fn from_io(path: &str, err: std::io::Error) -> Self {
        let path = path.to_string();
        match err.kind() {
            std::io::ErrorKind::NotFound => VfsError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => VfsError::PermissionDenied { path },
            _ => VfsError::Io {
                path,
                message: err.to_string(),
            },
        }
    }
}
