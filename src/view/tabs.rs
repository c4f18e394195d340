//! Tab expansion for a single line
//!
//! Maps each scalar of a line to the visual column it occupies once tabs are
//! expanded to a fixed width, and each visual column back to its scalar.

/// Bidirectional char/column map for one line of visible content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabExpander {
    char_to_col: Vec<usize>,
    col_to_char: Vec<usize>,
}

impl TabExpander {
    /// Expand `line` with tabs `tab_width` cells wide.
    ///
    /// A tab fills `tab_width` columns and maps to the rightmost of them.
    /// A width of 0 or 1 leaves tabs one cell wide.
    #[must_use]
    pub fn new(line: &[char], tab_width: usize) -> Self {
        let tw = tab_width.max(1);
        let tabs = line.iter().filter(|&&c| c == '\t').count();
        let mut char_to_col = Vec::with_capacity(line.len());
        let mut col_to_char = Vec::with_capacity(line.len() + tabs * (tw - 1));

        let mut n = 0;
        for (i, &ch) in line.iter().enumerate() {
            if ch == '\t' {
                col_to_char.extend(std::iter::repeat(i).take(tw));
                char_to_col.push(n + tw - 1);
                n += tw;
            } else {
                col_to_char.push(i);
                char_to_col.push(n);
                n += 1;
            }
        }

        TabExpander {
            char_to_col,
            col_to_char,
        }
    }

    /// Number of cells the expanded line occupies
    #[must_use]
    pub fn visual_len(&self) -> usize {
        self.col_to_char.len()
    }

    /// Visual column of scalar `ch`
    #[must_use]
    pub fn col(&self, ch: usize) -> Option<usize> {
        self.char_to_col.get(ch).copied()
    }

    /// Scalar drawn at visual column `col`
    #[must_use]
    pub fn char_at(&self, col: usize) -> Option<usize> {
        self.col_to_char.get(col).copied()
    }

    #[cfg(test)]
    pub(crate) fn char_to_col(&self) -> &[usize] {
        &self.char_to_col
    }

    #[cfg(test)]
    pub(crate) fn col_to_char(&self) -> &[usize] {
        &self.col_to_char
    }
}
