//! Character classification
//!
//! Pure and stateless; the scanner dispatches on the returned class.

use super::token::TokenKind;

/// Lexical class of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// `0`..=`9`, starts a number
    Digit,
    /// `'` or `"`, starts a string closed by the same character
    Quote(char),
    /// `+ - * /`
    Operator(TokenKind),
    Whitespace,
    /// Anything no recognizer accepts
    Other,
}

pub fn classify(ch: char) -> CharClass {
    if is_digit(ch) {
        CharClass::Digit
    } else if is_quote(ch) {
        CharClass::Quote(ch)
    } else if let Some(kind) = TokenKind::operator(ch) {
        CharClass::Operator(kind)
    } else if ch.is_whitespace() {
        CharClass::Whitespace
    } else {
        CharClass::Other
    }
}

/// ASCII decimal digit only; other Unicode digits are not numbers in Basil
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

pub fn is_quote(ch: char) -> bool {
    ch == '\'' || ch == '"'
}

/// Characters a numeric run may contain
pub fn is_number_part(ch: char) -> bool {
    is_digit(ch) || ch == '.'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify('7'), CharClass::Digit);
        assert_eq!(classify('"'), CharClass::Quote('"'));
        assert_eq!(classify('\''), CharClass::Quote('\''));
        assert_eq!(classify('+'), CharClass::Operator(TokenKind::Plus));
        assert_eq!(classify('/'), CharClass::Operator(TokenKind::Div));
        assert_eq!(classify('\t'), CharClass::Whitespace);
        assert_eq!(classify('a'), CharClass::Other);
        assert_eq!(classify('.'), CharClass::Other);
    }

    #[test]
    fn test_non_ascii_digits_are_other() {
        assert_eq!(classify('٣'), CharClass::Other);
        assert!(!is_number_part('٣'));
    }

    #[test]
    fn test_number_part() {
        assert!(is_number_part('0'));
        assert!(is_number_part('.'));
        assert!(!is_number_part('e'));
    }
}
