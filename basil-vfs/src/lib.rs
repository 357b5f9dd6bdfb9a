//! Basil Virtual File System
//!
//! Source files reach the lexer through the [`VirtualFileSystem`] trait, so the
//! `compile` pipeline can run against the real disk or an in-memory tree.
//!
//! # Usage
//! ```
//! use basil_vfs::{MemoryFileSystem, VirtualFileSystem};
//! use std::path::Path;
//!
//! let fs = MemoryFileSystem::with_files([("/main.bsl", "1+1")]);
//! let text = fs.read_to_string(Path::new("/main.bsl")).unwrap();
//! assert_eq!(text, "1+1");
//! ```

mod error;
mod memory;
mod native;
mod r#trait;

pub use error::{VfsError, VfsResult};
pub use memory::MemoryFileSystem;
pub use native::NativeFileSystem;
pub use r#trait::VirtualFileSystem;

/// Empty in-memory tree for tests and embedding.
pub fn memory_fs() -> MemoryFileSystem {
    MemoryFileSystem::new()
}

/// Disk backend; the default source of `compile`.
pub fn native_fs() -> NativeFileSystem {
    NativeFileSystem::new()
}
