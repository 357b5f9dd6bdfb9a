//! Scanner: the lexing state machine
//!
//! Walks the source line by line. On each character it either emits an
//! operator token, hands off to the number or string recognizer, or skips.

use super::classify::{classify, is_number_part, CharClass};
use super::cursor::LineCursor;
use super::error::{LexError, LexErrorKind};
use super::position::SourceSpan;
use super::source::Source;
use super::token::Token;
use super::token_stream::TokenStream;
use basil_config::{LexerConfig, UnrecognizedPolicy};
use tracing::{debug, info, trace};

/// 词法扫描器
///
/// Owns the [`TokenStream`] for the duration of one [`scan`](Scanner::scan)
/// and hands it to the caller when the scan succeeds.
pub struct Scanner {
    config: LexerConfig,
    stream: TokenStream,
    diagnostics: Vec<LexError>,
    current_line: usize,
}

impl Scanner {
    pub fn new(config: LexerConfig) -> Self {
        Self {
            config,
            stream: TokenStream::new(),
            diagnostics: Vec::new(),
            current_line: 0,
        }
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Tokenize every line of `source`.
    ///
    /// The returned stream has exactly one entry per source line. Malformed
    /// numbers and unterminated strings abort the whole scan; unrecognized
    /// characters follow [`LexerConfig::unrecognized`].
    pub fn scan(&mut self, source: &Source<'_>) -> Result<TokenStream, LexError> {
        self.diagnostics.clear();
        self.stream.create_lines(source.line_count());
        info!(target: "basil::lexer", lines = source.line_count(), "scan started");

        for (index, line) in source.lines().enumerate() {
            self.current_line = index;
            debug!(target: "basil::lexer", line = index, text = line.text, "scanning line");
            let mut cursor = LineCursor::new(line, index);
            if let Err(e) = self.scan_line(&mut cursor) {
                debug!(target: "basil::lexer", error = %e, "scan aborted");
                self.stream = TokenStream::new();
                return Err(e);
            }
        }

        let stream = std::mem::take(&mut self.stream);
        info!(
            target: "basil::lexer",
            tokens = stream.token_count(),
            diagnostics = self.diagnostics.len(),
            "scan finished"
        );
        Ok(stream)
    }

    /// Unrecognized characters collected by the last scan
    pub fn diagnostics(&self) -> &[LexError] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.diagnostics)
    }

    fn scan_line(&mut self, cursor: &mut LineCursor<'_>) -> Result<(), LexError> {
        while let Some(ch) = cursor.current() {
            match classify(ch) {
                CharClass::Digit => {
                    let token = self.scan_number(cursor)?;
                    self.emit(token)?;
                }
                CharClass::Quote(quote) => {
                    let token = self.scan_string(cursor, quote)?;
                    self.emit(token)?;
                }
                CharClass::Operator(_) => {
                    let start = cursor.position();
                    cursor.advance();
                    if let Some(token) = Token::operator(ch, cursor.span_from(start)) {
                        self.emit(token)?;
                    }
                }
                CharClass::Whitespace => cursor.advance(),
                CharClass::Other => {
                    self.unrecognized(ch, cursor)?;
                    cursor.advance();
                }
            }
        }
        Ok(())
    }

    /// Maximal run of digits and `.`; one `.` makes it a float, two is an error.
    fn scan_number(&self, cursor: &mut LineCursor<'_>) -> Result<Token, LexError> {
        let start = cursor.position();
        let mut text = String::new();
        let mut dots = 0;

        while let Some(ch) = cursor.current().filter(|&c| is_number_part(c)) {
            if ch == '.' {
                if dots == 1 {
                    return Err(LexError::malformed_number(start, text));
                }
                dots += 1;
            }
            text.push(ch);
            cursor.advance();
        }

        let span = cursor.span_from(start);
        if dots == 0 {
            let value = text.parse::<i64>().map_err(|_| {
                LexError::new(LexErrorKind::NumberOutOfRange, start, text.as_str())
            })?;
            Ok(Token::int(value, span))
        } else {
            let value = text
                .parse::<f64>()
                .map_err(|_| LexError::malformed_number(start, text.as_str()))?;
            Ok(Token::float(value, span))
        }
    }

    /// Verbatim run from `quote` to the next identical quote on the same line.
    fn scan_string(&self, cursor: &mut LineCursor<'_>, quote: char) -> Result<Token, LexError> {
        let start = cursor.position();
        let begin = cursor.offset();
        cursor.advance();

        while let Some(ch) = cursor.current() {
            cursor.advance();
            if ch == quote {
                let raw = cursor.slice_from(begin);
                let text = if self.config.strip_quotes {
                    // both delimiters are one byte
                    &raw[1..raw.len() - 1]
                } else {
                    raw
                };
                return Ok(Token::string(text, cursor.span_from(start)));
            }
        }

        Err(LexError::unterminated_string(start, cursor.slice_from(begin)))
    }

    fn unrecognized(&mut self, ch: char, cursor: &LineCursor<'_>) -> Result<(), LexError> {
        let position = cursor.position();
        match self.config.unrecognized {
            UnrecognizedPolicy::Skip => {
                trace!(target: "basil::lexer", %ch, %position, "skipping character");
                Ok(())
            }
            UnrecognizedPolicy::Collect => {
                debug!(target: "basil::lexer", %ch, %position, "unrecognized character");
                self.diagnostics.push(LexError::unrecognized(position, ch));
                Ok(())
            }
            UnrecognizedPolicy::Reject => Err(LexError::unrecognized(position, ch)),
        }
    }

    fn emit(&mut self, token: Token) -> Result<(), LexError> {
        trace!(target: "basil::lexer", line = self.current_line, token = %token, "emit");
        let span: SourceSpan = token.span();
        self.stream
            .add(token, self.current_line)
            .map_err(|e| LexError::new(LexErrorKind::Internal, span.start, e.to_string()))
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(LexerConfig::default())
    }
}
