//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use basil_core::LexError;
use basil_vfs::VfsError;
use serde::Serialize;
use thiserror::Error;

/// Basil 错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BasilError {
    /// Top-level verb nobody handles
    #[error("Command '{0}' does not exist!")]
    UnknownCommand(String),

    /// Path does not name a readable file
    #[error("File '{path}' could not be found!")]
    FileNotFound { path: String },

    /// The file exists but could not be read
    #[error("{0}")]
    Io(VfsError),

    /// 词法分析错误（结构化）
    #[error("{0}")]
    Lexer(#[from] LexError),

    /// Invalid configuration
    #[error("{0}")]
    Config(String),
}

impl From<VfsError> for BasilError {
    fn from(err: VfsError) -> Self {
        if err.is_not_found() {
            BasilError::FileNotFound {
                path: err.path().to_string(),
            }
        } else {
            BasilError::Io(err)
        }
    }
}

impl BasilError {
    /// 获取错误行号（如果有）
    pub fn line(&self) -> Option<usize> {
        match self {
            BasilError::Lexer(e) => Some(e.line()),
            _ => None,
        }
    }

    /// 获取错误列号（如果有）
    pub fn column(&self) -> Option<usize> {
        match self {
            BasilError::Lexer(e) => Some(e.column()),
            _ => None,
        }
    }

    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            BasilError::UnknownCommand(_) => "cli",
            BasilError::FileNotFound { .. } | BasilError::Io(_) => "vfs",
            BasilError::Lexer(_) => "lexer",
            BasilError::Config(_) => "config",
        }
    }

    /// Name printed before the details, e.g. `FileNotFound`
    pub fn kind_name(&self) -> &'static str {
        match self {
            BasilError::UnknownCommand(_) => "UnknownCommand",
            BasilError::FileNotFound { .. } => "FileNotFound",
            BasilError::Io(_) => "IoError",
            BasilError::Lexer(e) => e.name(),
            BasilError::Config(_) => "ConfigError",
        }
    }

    /// 转换为结构化错误报告
    ///
    /// CLI 直接打印，工具可以序列化为 JSON。
    pub fn to_report(&self) -> ErrorReport {
        let (byte_offset, text) = match self {
            BasilError::Lexer(e) => (Some(e.position.byte_offset), Some(e.text.clone())),
            _ => (None, None),
        };
        ErrorReport {
            phase: self.phase(),
            line: self.line(),
            column: self.column(),
            byte_offset,
            error_kind: self.kind_name().to_string(),
            message: self.to_string(),
            text,
        }
    }
}

/// 结构化错误报告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    /// 错误阶段: cli, vfs, lexer, config
    pub phase: &'static str,
    /// 错误行号（1-based，如果有）
    pub line: Option<usize>,
    /// 错误列号（1-based，如果有）
    pub column: Option<usize>,
    /// Byte offset into the whole source (0-based)
    pub byte_offset: Option<usize>,
    /// 错误类型（可用于程序化处理）
    pub error_kind: String,
    /// 人类可读的错误消息
    pub message: String,
    /// Offending source text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl std::fmt::Display for ErrorReport {
    /// `Kind: details`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_kind, self.message)
    }
}

impl ErrorReport {
    /// 转换为 JSON 格式（工具集成使用）
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{{\"message\":{:?}}}", self.message))
    }
}
