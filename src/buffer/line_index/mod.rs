//! Line index over a flat scalar buffer
//!
//! Maps logical line numbers to spans of the document. Every span includes
//! its terminating newline, and the text after the last newline is always
//! kept as a final (possibly empty) line, so there is at least one line.

use std::ops::Range;

#[derive(Clone, PartialEq, Eq)]
pub struct LineIndex {
    spans: Vec<Range<usize>>,
}

impl LineIndex {
    /// Build the index from scratch for `data`
    pub fn build(data: &[char]) -> Self {
        let mut spans = Vec::new();
        let mut start = 0;
        for (i, &ch) in data.iter().enumerate() {
            if ch == '\n' {
                spans.push(start..i + 1);
                start = i + 1;
            }
        }
        spans.push(start..data.len());
        Self { spans }
    }

    pub fn line_count(&self) -> usize {
        self.spans.len()
    }

    /// Span of `line_idx`, newline included
    pub fn span(&self, line_idx: usize) -> Option<Range<usize>> {
        self.spans.get(line_idx).cloned()
    }

    pub fn get_start(&self, line_idx: usize) -> Option<usize> {
        self.spans.get(line_idx).map(|s| s.start)
    }

    /// Line containing `pos`. A newline belongs to the line it terminates,
    /// and the end of the document belongs to the last line.
    pub fn get_line_at(&self, pos: usize) -> usize {
        self.spans
            .partition_point(|span| span.start <= pos)
            .saturating_sub(1)
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::build(&[])
    }
}

impl std::fmt::Debug for LineIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineIndex")
            .field("lines", &self.line_count())
            .finish()
    }
}
