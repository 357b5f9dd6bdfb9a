//! Basil lexer
//!
//! Single pass, line by line:
//! - [`Source`] splits the input into lines (buffer or pre-split, same result)
//! - [`Scanner`] walks each line with a [`LineCursor`] and dispatches on [`classify`]
//! - [`TokenStream`] keeps tokens and their display strings in lock-step

pub mod classify;
pub mod cursor;
pub mod error;
pub mod position;
pub mod scanner;
pub mod source;
pub mod token;
pub mod token_stream;

pub use classify::{classify, CharClass};
pub use cursor::LineCursor;
pub use error::{LexError, LexErrorKind};
pub use position::{SourcePosition, SourceSpan};
pub use scanner::Scanner;
pub use source::Source;
pub use token::{Literal, Token, TokenKind};
pub use token_stream::{TokenStream, TokenStreamError};

use basil_config::LexerConfig;

/// Tokenize a buffer with the default lexer configuration.
///
/// Diagnostics for unrecognized characters are dropped; use [`Scanner`]
/// directly to inspect them.
pub fn tokenize(text: &str) -> Result<TokenStream, LexError> {
    Scanner::new(LexerConfig::default()).scan(&Source::from_text(text))
}
