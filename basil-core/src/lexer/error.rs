//! Lexer 错误类型
//!
//! Structured lexical errors: kind, offending text and position. The scanner
//! returns them; callers decide whether and how to print.

use super::position::SourcePosition;
use thiserror::Error;

/// What went wrong while scanning
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A numeric run with a second decimal point
    #[error("malformed numeric literal")]
    MalformedNumber,
    /// An integer literal outside the 64-bit range
    #[error("integer literal out of range")]
    NumberOutOfRange,
    /// No matching close quote before end of line
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A character no recognizer accepts
    #[error("unrecognized character")]
    UnrecognizedCharacter,
    /// Token stream bookkeeping failed
    #[error("internal lexer error")]
    Internal,
}

impl LexErrorKind {
    /// Kind name used in `Kind: details` output
    pub fn name(&self) -> &'static str {
        match self {
            LexErrorKind::MalformedNumber => "MalformedNumericLiteral",
            LexErrorKind::NumberOutOfRange => "NumberOutOfRange",
            LexErrorKind::UnterminatedString => "UnterminatedString",
            LexErrorKind::UnrecognizedCharacter => "UnrecognizedCharacter",
            LexErrorKind::Internal => "InternalError",
        }
    }
}

/// 词法错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} '{text}' at {position}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Where the offending literal or character starts
    pub position: SourcePosition,
    /// The offending fragment, e.g. the digits read before a second `.`
    pub text: String,
}

impl LexError {
    pub fn new(kind: LexErrorKind, position: SourcePosition, text: impl Into<String>) -> Self {
        Self {
            kind,
            position,
            text: text.into(),
        }
    }

    pub fn malformed_number(position: SourcePosition, text: impl Into<String>) -> Self {
        Self::new(LexErrorKind::MalformedNumber, position, text)
    }

    pub fn unterminated_string(position: SourcePosition, text: impl Into<String>) -> Self {
        Self::new(LexErrorKind::UnterminatedString, position, text)
    }

    pub fn unrecognized(position: SourcePosition, ch: char) -> Self {
        Self::new(LexErrorKind::UnrecognizedCharacter, position, ch.to_string())
    }

    /// 1-based line
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// 1-based column
    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_error_display() {
        let err = LexError::malformed_number(SourcePosition::new(2, 5, 9), "1.2");
        assert_eq!(err.to_string(), "malformed numeric literal '1.2' at line 2, column 5");
        assert_eq!(err.name(), "MalformedNumericLiteral");
        assert_eq!(err.line(), 2);
        assert_eq!(err.column(), 5);
    }
}
