//! CLI 配置
//!
//! 日志配置（tracing 级别）以及项目文件加载

use basil_api::BasilError;
use basil_config::{BasilConfig, LogLevel, LoggingConfig, Phase};
use std::path::Path;
use tracing::Level;

/// Project file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "basil.json";

/// CLI 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub lexer: Option<Level>,
    pub api: Option<Level>,
    pub vfs: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            lexer: None,
            api: None,
            vfs: None,
        }
    }
}

impl From<&LoggingConfig> for LogConfig {
    fn from(logging: &LoggingConfig) -> Self {
        Self {
            global: to_level(logging.level),
            lexer: logging.lexer.map(to_level),
            api: logging.api.map(to_level),
            vfs: logging.vfs.map(to_level),
        }
    }
}

impl LogConfig {
    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        let specific = if target == Phase::Lexer.target() {
            self.lexer
        } else if target == Phase::Api.target() {
            self.api
        } else if target == Phase::Vfs.target() {
            self.vfs
        } else {
            None
        };
        specific.unwrap_or(self.global)
    }
}

pub fn to_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

/// Read the project file.
///
/// An explicit path must exist; the default `basil.json` is optional.
pub fn load_project(explicit: Option<&Path>) -> Result<BasilConfig, BasilError> {
    let path = match explicit {
        Some(path) => path,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if !default.is_file() {
                return Ok(BasilConfig::default());
            }
            default
        }
    };

    let content = std::fs::read_to_string(path)
        .map_err(|e| BasilError::Config(format!("cannot read '{}': {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| BasilError::Config(format!("cannot parse '{}': {}", path.display(), e)))
}
