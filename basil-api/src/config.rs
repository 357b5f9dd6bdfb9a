//! API 层配置
//!
//! 包含执行配置 RunConfig 和全局单例（供 CLI 使用）

use basil_config::{BasilConfig, LexerConfig, OutputConfig};
use basil_vfs::{native_fs, VirtualFileSystem};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Compile configuration
#[derive(Clone)]
pub struct RunConfig {
    /// Lexer behavior
    pub lexer: LexerConfig,
    /// How results are presented
    pub output: OutputConfig,
    /// Where `compile` reads source files from
    pub fs: Arc<dyn VirtualFileSystem>,
}

impl RunConfig {
    /// Build from a project file, reading from the native file system
    pub fn from_project(config: &BasilConfig) -> Self {
        Self {
            lexer: config.lexer.clone(),
            output: config.output.clone(),
            ..Self::default()
        }
    }

    /// Replace the file system backend
    pub fn with_fs(mut self, fs: impl VirtualFileSystem + 'static) -> Self {
        self.fs = Arc::new(fs);
        self
    }
}

impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("lexer", &self.lexer)
            .field("output", &self.output)
            .finish()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            lexer: LexerConfig::default(),
            output: OutputConfig::default(),
            fs: Arc::new(native_fs()),
        }
    }
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration
///
/// Hands the config back if one was already installed.
pub fn init(config: RunConfig) -> Result<(), RunConfig> {
    GLOBAL_CONFIG.set(config)
}

/// Get global config reference, `None` before [`init`]
pub fn config() -> Option<&'static RunConfig> {
    GLOBAL_CONFIG.get()
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
