//! Token types for the Basil lexer.

use super::position::SourceSpan;
use serde::Serialize;
use std::fmt;

/// Token kinds for the Basil language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Literals
    #[serde(rename = "INT")]
    Int,
    #[serde(rename = "FLOAT")]
    Float,
    #[serde(rename = "STR")]
    Str,
    /// Reserved for variables; no recognizer produces it yet
    #[serde(rename = "IDENT")]
    Ident,

    // Operators
    #[serde(rename = "PLUS")]
    Plus,
    #[serde(rename = "MINUS")]
    Minus,
    #[serde(rename = "MUL")]
    Mul,
    #[serde(rename = "DIV")]
    Div,
}

impl TokenKind {
    /// Tag used in the display projection
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Str => "STR",
            TokenKind::Ident => "IDENT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mul => "MUL",
            TokenKind::Div => "DIV",
        }
    }

    /// Whether tokens of this kind carry a literal value
    pub fn has_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Int | TokenKind::Float | TokenKind::Str | TokenKind::Ident
        )
    }

    /// Operator kind for a single source character
    pub fn operator(ch: char) -> Option<TokenKind> {
        match ch {
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Mul),
            '/' => Some(TokenKind::Div),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Literal value carried by INT, FLOAT, STR and IDENT tokens
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Literal {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Literal::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Literal::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Literal::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(v) => write!(f, "{}", v),
            Literal::Float(v) => write!(f, "{}", v),
            Literal::Text(s) => f.write_str(s),
        }
    }
}

/// A token produced by the lexer.
///
/// Built only through the kind-specific constructors, so a literal is present
/// exactly when the kind carries one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    kind: TokenKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    literal: Option<Literal>,
    span: SourceSpan,
}

impl Token {
    pub fn int(value: i64, span: SourceSpan) -> Self {
        Self::with_literal(TokenKind::Int, Literal::Int(value), span)
    }

    pub fn float(value: f64, span: SourceSpan) -> Self {
        Self::with_literal(TokenKind::Float, Literal::Float(value), span)
    }

    pub fn string(text: impl Into<String>, span: SourceSpan) -> Self {
        Self::with_literal(TokenKind::Str, Literal::Text(text.into()), span)
    }

    pub fn ident(name: impl Into<String>, span: SourceSpan) -> Self {
        Self::with_literal(TokenKind::Ident, Literal::Text(name.into()), span)
    }

    /// Operator token for `+ - * /`; `None` for any other character
    pub fn operator(ch: char, span: SourceSpan) -> Option<Self> {
        TokenKind::operator(ch).map(|kind| Self {
            kind,
            literal: None,
            span,
        })
    }

    fn with_literal(kind: TokenKind, literal: Literal, span: SourceSpan) -> Self {
        Self {
            kind,
            literal: Some(literal),
            span,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn literal(&self) -> Option<&Literal> {
        self.literal.as_ref()
    }

    pub fn span(&self) -> SourceSpan {
        self.span
    }

    /// `KIND` or `KIND:literal`
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{}:{}", self.kind, literal),
            None => write!(f, "{}", self.kind),
        }
    }
}
