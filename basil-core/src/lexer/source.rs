//! Source text split into lines
//!
//! A buffer and a pre-split line list produce the same [`Source`]; the scanner
//! only ever sees lines.

/// One line of source and where it starts in the whole buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub text: &'a str,
    /// Byte offset of the first character of this line
    pub offset: usize,
}

/// Ordered, borrowed lines of a source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source<'a> {
    lines: Vec<SourceLine<'a>>,
}

impl<'a> Source<'a> {
    /// Split a buffer on `\n`, dropping a trailing `\r` from each line.
    ///
    /// Every separator starts a new line, so `"a\n"` has two lines and the
    /// empty buffer has one.
    pub fn from_text(text: &'a str) -> Self {
        let mut lines = Vec::new();
        let mut offset = 0;
        for raw in text.split('\n') {
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            lines.push(SourceLine { text: line, offset });
            offset += raw.len() + 1;
        }
        Self { lines }
    }

    /// Use lines that were split by the caller; offsets assume `\n` joins.
    pub fn from_lines<S: AsRef<str>>(lines: &'a [S]) -> Self {
        let mut offset = 0;
        let lines = lines
            .iter()
            .map(|line| {
                let text = line.as_ref();
                let entry = SourceLine { text, offset };
                offset += text.len() + 1;
                entry
            })
            .collect();
        Self { lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> impl Iterator<Item = SourceLine<'a>> + '_ {
        self.lines.iter().copied()
    }
}
