//! Character cursor over one source line

use super::position::{SourcePosition, SourceSpan};
use super::source::SourceLine;

/// Cursor with `advance`/`peek` over a single line.
///
/// `current()` is `None` exactly when the cursor has run past the end of the
/// line.
pub struct LineCursor<'a> {
    line: SourceLine<'a>,
    line_index: usize,
    /// (byte index within the line, char)
    chars: Vec<(usize, char)>,
    position: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(line: SourceLine<'a>, line_index: usize) -> Self {
        Self {
            chars: line.text.char_indices().collect(),
            line,
            line_index,
            position: 0,
        }
    }

    pub fn current(&self) -> Option<char> {
        self.chars.get(self.position).map(|&(_, ch)| ch)
    }

    /// The character after the current one
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.position + 1).map(|&(_, ch)| ch)
    }

    pub fn advance(&mut self) {
        if self.position < self.chars.len() {
            self.position += 1;
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Char offset into the line
    pub fn offset(&self) -> usize {
        self.position
    }

    /// Source position of the current character (or of end of line)
    pub fn position(&self) -> SourcePosition {
        SourcePosition::new(
            self.line_index + 1,
            self.position + 1,
            self.line.offset + self.byte_index(self.position),
        )
    }

    /// Span from `start` to the current position
    pub fn span_from(&self, start: SourcePosition) -> SourceSpan {
        SourceSpan::range(start, self.position())
    }

    /// Line text from char offset `start` up to the current position
    pub fn slice_from(&self, start: usize) -> &'a str {
        let from = self.byte_index(start);
        let to = self.byte_index(self.position);
        &self.line.text[from..to]
    }

    fn byte_index(&self, char_offset: usize) -> usize {
        self.chars
            .get(char_offset)
            .map(|&(byte, _)| byte)
            .unwrap_or(self.line.text.len())
    }
}
