//! Basil Core - lexical analysis (pure logic, no IO)
//!
//! Turns source text into a line-indexed [`TokenStream`]. Only operates on
//! in-memory data; loading files and printing results belong to `basil-api`
//! and `basil-cli`.
//!
//! Configuration is passed explicitly via parameters, not via global state.
//!
//! ```
//! use basil_core::tokenize;
//!
//! let stream = tokenize("12+3.5*2").unwrap();
//! assert_eq!(stream.display()[0], ["INT:12", "PLUS", "FLOAT:3.5", "MUL", "INT:2"]);
//! ```

pub mod lexer;

pub use lexer::{
    classify, tokenize, CharClass, LexError, LexErrorKind, LineCursor, Literal, Scanner, Source,
    SourcePosition, SourceSpan, Token, TokenKind, TokenStream, TokenStreamError,
};

// Re-export config types from basil-config
pub use basil_config::{LexerConfig, UnrecognizedPolicy};
