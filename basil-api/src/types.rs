//! API 类型定义
//!
//! 词法分析的输出类型。

use basil_core::{LexError, TokenStream};

/// Result of tokenizing in-memory text
#[derive(Debug, Clone)]
pub struct TokenizeOutput {
    /// Line-indexed tokens
    pub stream: TokenStream,
    /// Unrecognized characters collected during the scan
    pub diagnostics: Vec<LexError>,
}

impl TokenizeOutput {
    /// `KIND` / `KIND:literal` per line
    pub fn display(&self) -> &[Vec<String>] {
        self.stream.display()
    }
}

/// Result of compiling a file
#[derive(Debug, Clone)]
pub struct CompileOutput {
    /// Path as given by the caller
    pub path: String,
    /// Full source text
    pub source: String,
    pub stream: TokenStream,
    pub diagnostics: Vec<LexError>,
}

impl CompileOutput {
    pub fn display(&self) -> &[Vec<String>] {
        self.stream.display()
    }
}
