//! Line-indexed token storage
//!
//! Tokens and their display strings live in two parallel per-line vectors;
//! every mutation touches both so they always have the same shape.

use super::token::Token;
use serde::Serialize;
use thiserror::Error;

/// Misuse of [`TokenStream::add`] / [`TokenStream::remove`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenStreamError {
    #[error("line {line} was never created (stream has {lines} lines)")]
    UnknownLine { line: usize, lines: usize },

    #[error("no token at index {index} on line {line} (line has {len} tokens)")]
    IndexOutOfBounds { index: usize, line: usize, len: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TokenStream {
    tokens: Vec<Vec<Token>>,
    display: Vec<Vec<String>>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `count` empty lines, indexed `0..count`.
    ///
    /// Replaces whatever the stream held before.
    pub fn create_lines(&mut self, count: usize) {
        self.tokens = vec![Vec::new(); count];
        self.display = vec![Vec::new(); count];
    }

    /// Append a token and its display string to `line`.
    pub fn add(&mut self, token: Token, line: usize) -> Result<(), TokenStreamError> {
        let lines = self.tokens.len();
        let (tokens, display) = self
            .tokens
            .get_mut(line)
            .zip(self.display.get_mut(line))
            .ok_or(TokenStreamError::UnknownLine { line, lines })?;
        display.push(token.display());
        tokens.push(token);
        Ok(())
    }

    /// Remove the token at `index` on `line`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize, line: usize) -> Result<Token, TokenStreamError> {
        let lines = self.tokens.len();
        let (tokens, display) = self
            .tokens
            .get_mut(line)
            .zip(self.display.get_mut(line))
            .ok_or(TokenStreamError::UnknownLine { line, lines })?;
        if index >= tokens.len() {
            return Err(TokenStreamError::IndexOutOfBounds {
                index,
                line,
                len: tokens.len(),
            });
        }
        display.remove(index);
        Ok(tokens.remove(index))
    }

    /// Tokens per line
    pub fn tokens(&self) -> &[Vec<Token>] {
        &self.tokens
    }

    /// `KIND` / `KIND:literal` strings per line
    pub fn display(&self) -> &[Vec<String>] {
        &self.display
    }

    pub fn line_count(&self) -> usize {
        self.tokens.len()
    }

    /// Total tokens over all lines
    pub fn token_count(&self) -> usize {
        self.tokens.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.token_count() == 0
    }

    /// All tokens in source order with their line index
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Token)> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .flat_map(|(line, tokens)| tokens.iter().map(move |t| (line, t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::position::SourceSpan;

    fn op(ch: char) -> Token {
        Token::operator(ch, SourceSpan::default()).unwrap()
    }

    fn assert_same_shape(stream: &TokenStream) {
        assert_eq!(stream.tokens().len(), stream.display().len());
        for (tokens, display) in stream.tokens().iter().zip(stream.display()) {
            assert_eq!(tokens.len(), display.len());
            for (token, shown) in tokens.iter().zip(display) {
                assert_eq!(&token.display(), shown);
            }
        }
    }

    #[test]
    fn test_create_lines() {
        let mut stream = TokenStream::new();
        stream.create_lines(3);
        assert_eq!(stream.line_count(), 3);
        assert!(stream.is_empty());
        assert_same_shape(&stream);
    }

    #[test]
    fn test_add_unknown_line() {
        let mut stream = TokenStream::new();
        stream.create_lines(1);
        let err = stream.add(op('+'), 1).unwrap_err();
        assert_eq!(err, TokenStreamError::UnknownLine { line: 1, lines: 1 });
        assert!(stream.is_empty());
    }

    #[test]
    fn test_add_before_create_fails() {
        let mut stream = TokenStream::new();
        assert!(stream.add(op('+'), 0).is_err());
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut stream = TokenStream::new();
        stream.create_lines(2);
        for ch in ['+', '-', '*'] {
            stream.add(op(ch), 1).unwrap();
        }
        let removed = stream.remove(1, 1).unwrap();
        assert_eq!(removed.display(), "MINUS");
        assert_eq!(stream.display()[1], ["PLUS", "MUL"]);
        assert_same_shape(&stream);
    }

    #[test]
    fn test_remove_out_of_bounds() {
        let mut stream = TokenStream::new();
        stream.create_lines(1);
        stream.add(op('/'), 0).unwrap();
        assert_eq!(
            stream.remove(1, 0).unwrap_err(),
            TokenStreamError::IndexOutOfBounds {
                index: 1,
                line: 0,
                len: 1
            }
        );
        assert!(matches!(
            stream.remove(0, 4),
            Err(TokenStreamError::UnknownLine { line: 4, .. })
        ));
        assert_eq!(stream.token_count(), 1);
    }

    #[test]
    fn test_shape_after_mixed_edits() {
        let mut stream = TokenStream::new();
        stream.create_lines(3);
        let script: [(bool, usize, usize); 8] = [
            (true, 0, 0),
            (true, 2, 0),
            (true, 2, 0),
            (false, 2, 1),
            (true, 0, 0),
            (false, 0, 0),
            (true, 1, 0),
            (false, 1, 0),
        ];
        for (add, line, index) in script {
            if add {
                stream.add(op('+'), line).unwrap();
            } else {
                stream.remove(index, line).unwrap();
            }
            assert_same_shape(&stream);
        }
        assert_eq!(stream.token_count(), 2);
    }

    #[test]
    fn test_iter_in_source_order() {
        let mut stream = TokenStream::new();
        stream.create_lines(2);
        stream.add(op('-'), 1).unwrap();
        stream.add(op('+'), 0).unwrap();
        let order: Vec<_> = stream.iter().map(|(line, t)| (line, t.display())).collect();
        assert_eq!(order, [(0, "PLUS".to_string()), (1, "MINUS".to_string())]);
    }
}
