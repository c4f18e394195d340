//! Text buffer
//!
//! Holds the document as a flat sequence of Unicode scalar values together
//! with a derived line index, and converts between absolute offsets and
//! logical `(line, char)` positions.
//!
//! ## buffer/ Invariants
//!
//! - `data` is only mutated through `insert` and `delete`.
//! - The line index is rebuilt from scratch after every mutation.
//! - There is always at least one line; every line but the last ends in `'\n'`.
//! - Each line has `line_len + 1` addressable positions; the extra one is the
//!   end-of-line slot (the newline, or the end of the document on the last line).
//! - Offsets outside `[0, len]` are caller bugs and panic.

use crate::constants::errors::UTF8_ERROR;
use crate::error::{EditorError, ErrorType};
use std::fmt::{self, Display};

pub mod line_index;
use line_index::LineIndex;

/// Text buffer storing one `char` per Unicode scalar value
#[derive(Clone, PartialEq, Eq)]
pub struct TextBuffer {
    data: Vec<char>,
    line_index: LineIndex,
}

impl TextBuffer {
    /// Create a buffer holding `text`
    #[must_use]
    pub fn new(text: &str) -> Self {
        let data: Vec<char> = text.chars().collect();
        let line_index = LineIndex::build(&data);
        TextBuffer { data, line_index }
    }

    /// Create a buffer from raw file contents, which must be UTF-8
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EditorError> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            EditorError::new(ErrorType::Parse, UTF8_ERROR, format!("not valid UTF-8: {e}"))
        })?;
        Ok(Self::new(text))
    }

    /// Total number of scalars in the document
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of logical lines (never zero)
    #[must_use]
    pub fn nlines(&self) -> usize {
        self.line_index.line_count()
    }

    /// Scalars of line `n` including its newline; empty when `n` is out of range
    #[must_use]
    pub fn line(&self, n: usize) -> &[char] {
        match self.line_index.span(n) {
            Some(span) => &self.data[span],
            None => &[],
        }
    }

    /// Visible scalars of line `n`, without the newline
    #[must_use]
    pub fn content(&self, n: usize) -> &[char] {
        let line = self.line(n);
        match line.split_last() {
            Some(('\n', rest)) => rest,
            _ => line,
        }
    }

    /// Length of the visible content of line `n`
    #[must_use]
    pub fn line_len(&self, n: usize) -> usize {
        self.content(n).len()
    }

    /// Scalar at `(line, ch)`
    #[must_use]
    pub fn rune(&self, line: usize, ch: usize) -> char {
        self.line(line)[ch]
    }

    /// Splice `chars` into the document at `offset`. Returns the number of
    /// scalars written.
    pub fn insert(&mut self, offset: usize, chars: &[char]) -> usize {
        assert!(
            offset <= self.data.len(),
            "insert offset {} out of bounds (len: {})",
            offset,
            self.data.len()
        );
        self.data.splice(offset..offset, chars.iter().copied());
        self.reindex();
        chars.len()
    }

    /// Remove scalars around `offset`.
    ///
    /// A positive `n` removes `n` scalars starting at `offset`. A negative `n`
    /// removes `|n|` scalars ending at `offset`, which is then the exclusive
    /// upper bound. Returns the number of scalars removed.
    pub fn delete(&mut self, offset: usize, n: isize) -> usize {
        if n == 0 {
            return 0;
        }
        let count = n.unsigned_abs();
        let len = self.data.len();
        let range = if n > 0 {
            assert!(
                offset + count <= len,
                "delete of {} at {} out of bounds (len: {})",
                count,
                offset,
                len
            );
            offset..offset + count
        } else {
            assert!(
                count <= offset && offset <= len,
                "backward delete of {} at {} out of bounds (len: {})",
                count,
                offset,
                len
            );
            offset - count..offset
        };
        self.data.drain(range);
        self.reindex();
        count
    }

    /// Logical position of `offset`
    #[must_use]
    pub fn pos(&self, offset: usize) -> (usize, usize) {
        assert!(
            offset <= self.data.len(),
            "offset {} out of bounds (len: {})",
            offset,
            self.data.len()
        );
        let line = self.line_index.get_line_at(offset);
        let start = self.line_index.get_start(line).unwrap_or(0);
        (line, offset - start)
    }

    /// Absolute offset of `(line, ch)`. `ch` is clamped to the end-of-line slot.
    #[must_use]
    pub fn offset(&self, line: usize, ch: usize) -> usize {
        let start = match self.line_index.get_start(line) {
            Some(start) => start,
            None => panic!(
                "line {} out of bounds (lines: {})",
                line,
                self.line_index.line_count()
            ),
        };
        start + ch.min(self.line_len(line))
    }

    /// UTF-8 encoding of the whole document
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// Convert a scalar offset to a UTF-8 byte offset
    #[must_use]
    pub fn char_to_byte(&self, char_index: usize) -> usize {
        self.data[..char_index].iter().map(|c| c.len_utf8()).sum()
    }

    /// Convert a UTF-8 byte offset to a scalar offset
    #[must_use]
    pub fn byte_to_char(&self, byte_offset: usize) -> usize {
        let mut bytes = 0;
        for (i, c) in self.data.iter().enumerate() {
            if bytes >= byte_offset {
                return i;
            }
            bytes += c.len_utf8();
        }
        self.data.len()
    }

    fn reindex(&mut self) {
        self.line_index = LineIndex::build(&self.data);
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new("")
    }
}

impl Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBuffer")
            .field("len", &self.len())
            .field("line_index", &self.line_index)
            .finish()
    }
}
