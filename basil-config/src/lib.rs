//! Basil Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Basil crates,
//! and doubles as the schema of the `basil.json` project file.

use serde::{Deserialize, Serialize};

/// What the scanner does with a character no recognizer accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnrecognizedPolicy {
    /// Record a diagnostic and keep scanning
    #[default]
    Collect,
    /// Drop the character without a trace
    Skip,
    /// Abort the scan with an error
    Reject,
}

impl UnrecognizedPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnrecognizedPolicy::Collect => "collect",
            UnrecognizedPolicy::Skip => "skip",
            UnrecognizedPolicy::Reject => "reject",
        }
    }
}

/// Configuration for lexer behavior
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Policy for unrecognized characters
    pub unrecognized: UnrecognizedPolicy,
    /// Store only the inner content of string literals
    pub strip_quotes: bool,
}

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Parse a level name; "silent" maps to `Error`
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Colored multi-line output (development)
    Pretty,
    /// One line per event
    #[default]
    Compact,
    /// JSON lines (tool integration)
    Json,
}

/// Per-phase log levels
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level applied to every target without an override
    pub level: LogLevel,
    pub lexer: Option<LogLevel>,
    pub api: Option<LogLevel>,
    pub vfs: Option<LogLevel>,
    pub format: LogFormat,
    /// Also append log lines to this file
    pub file: Option<String>,
}

/// How the token dump is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<line>: [KIND, KIND:literal]`
    #[default]
    Text,
    /// JSON object keyed by line index
    Json,
}

/// Output options for the `compile` command
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Echo the numbered source before the tokens
    pub show_source: bool,
    /// Emit structured tokens instead of the display projection
    pub tokens: bool,
}

/// Root of the `basil.json` project file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BasilConfig {
    pub lexer: LexerConfig,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

/// Execution phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Api,
    Vfs,
    Cli,
}

impl Phase {
    /// All phases, in pipeline order
    pub const ALL: [Phase; 4] = [Phase::Vfs, Phase::Lexer, Phase::Api, Phase::Cli];

    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Api => "api",
            Phase::Vfs => "vfs",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("basil::{}", self.as_str())
    }
}
