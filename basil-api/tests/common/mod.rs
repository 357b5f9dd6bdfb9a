//! 测试辅助工具

#![allow(dead_code)]

use basil_api::RunConfig;
use basil_vfs::MemoryFileSystem;
use std::path::PathBuf;

/// Run config reading from an in-memory tree
pub fn memory_config(files: &[(&str, &str)]) -> RunConfig {
    RunConfig::default().with_fs(MemoryFileSystem::with_files(files.iter().copied()))
}

/// Write `content` to a unique file under the system temp dir
pub fn temp_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("basil-api-{}-{}.bsl", name, std::process::id()));
    std::fs::write(&path, content).expect("write temp file");
    path
}
