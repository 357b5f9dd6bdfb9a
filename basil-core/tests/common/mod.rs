//! 测试辅助工具
//!
//! Shared helpers for the lexer integration tests.

#![allow(dead_code)]

use basil_core::{LexError, LexerConfig, Scanner, Source, TokenStream};

/// Scan a buffer with the default configuration
pub fn lex(text: &str) -> Result<TokenStream, LexError> {
    Scanner::default().scan(&Source::from_text(text))
}

/// Scan with a custom configuration, returning the collected diagnostics too
pub fn lex_with(config: LexerConfig, text: &str) -> (Result<TokenStream, LexError>, Vec<LexError>) {
    let mut scanner = Scanner::new(config);
    let result = scanner.scan(&Source::from_text(text));
    (result, scanner.take_diagnostics())
}

/// Display projection of a single-line input
pub fn line0(text: &str) -> Vec<String> {
    let stream = lex(text).unwrap_or_else(|e| panic!("lex {:?} failed: {}", text, e));
    assert_eq!(stream.line_count(), 1, "expected a single line for {:?}", text);
    stream.display()[0].clone()
}

/// Tokens and display strings have the same keys, lengths and order
pub fn assert_lockstep(stream: &TokenStream) {
    assert_eq!(stream.tokens().len(), stream.display().len());
    for (line, (tokens, shown)) in stream.tokens().iter().zip(stream.display()).enumerate() {
        assert_eq!(tokens.len(), shown.len(), "line {} out of step", line);
        for (token, text) in tokens.iter().zip(shown) {
            assert_eq!(&token.display(), text);
        }
    }
}
