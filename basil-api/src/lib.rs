//! Basil API - Compile orchestration layer
//!
//! Provides the unified entry points, including:
//! - Source loading through the virtual file system
//! - Configuration abstraction (RunConfig)
//! - Unified error handling (BasilError)
//!
//! For CLI convenience, this crate provides a global singleton API.
//! For library use, prefer the explicit `compile_with_config(path, &config)` API.

use std::path::Path;

use basil_core::{Scanner, Source};
use tracing::{debug, info};

pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

// Re-export config types from basil_config
pub use basil_config::{
    BasilConfig, LexerConfig, LogFormat, LogLevel, LoggingConfig, OutputConfig, OutputFormat,
    Phase, UnrecognizedPolicy,
};

pub mod error;
pub mod types;
pub use error::{BasilError, ErrorReport};
pub use types::{CompileOutput, TokenizeOutput};

// Re-export core types
pub use basil_config;
pub use basil_core::{LexError, LexErrorKind, Literal, Token, TokenKind, TokenStream};

/// Tokenize a source buffer with explicit configuration
pub fn tokenize(source: &str, config: &RunConfig) -> Result<TokenizeOutput, BasilError> {
    scan(&Source::from_text(source), config)
}

/// Tokenize pre-split lines; equivalent to joining them with `\n`
pub fn tokenize_lines<S: AsRef<str>>(
    lines: &[S],
    config: &RunConfig,
) -> Result<TokenizeOutput, BasilError> {
    scan(&Source::from_lines(lines), config)
}

fn scan(source: &Source<'_>, config: &RunConfig) -> Result<TokenizeOutput, BasilError> {
    let mut scanner = Scanner::new(config.lexer.clone());
    let stream = scanner.scan(source)?;
    let diagnostics = scanner.take_diagnostics();
    debug!(
        target: "basil::api",
        lines = stream.line_count(),
        diagnostics = diagnostics.len(),
        "tokenized"
    );
    Ok(TokenizeOutput {
        stream,
        diagnostics,
    })
}

/// Resolve `path` and read its full text
pub fn read_source(path: &str, config: &RunConfig) -> Result<String, BasilError> {
    let file = Path::new(path);
    if !config.fs.is_file(file) {
        return Err(BasilError::FileNotFound {
            path: path.to_string(),
        });
    }
    Ok(config.fs.read_to_string(file)?)
}

/// Compile a file with explicit configuration
///
/// This is the recommended API for library users.
pub fn compile_with_config(path: &str, config: &RunConfig) -> Result<CompileOutput, BasilError> {
    info!(target: "basil::api", path, "compile started");
    let source = read_source(path, config)?;
    let TokenizeOutput {
        stream,
        diagnostics,
    } = tokenize(&source, config)?;
    info!(
        target: "basil::api",
        path,
        tokens = stream.token_count(),
        "compile finished"
    );
    Ok(CompileOutput {
        path: path.to_string(),
        source,
        stream,
        diagnostics,
    })
}

// ==================== Legacy API (using global config) ====================

/// Compile a file (uses global config)
pub fn compile(path: &str) -> Result<CompileOutput, BasilError> {
    let config = get_config()
        .ok_or_else(|| BasilError::Config("global configuration not initialized".to_string()))?;
    compile_with_config(path, config)
}
