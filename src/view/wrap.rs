//! Soft-wrapping viewport renderer
//!
//! Lays logical lines out into rows of a fixed width, expanding tabs, and
//! records the mapping in both directions for one frame.

use super::{Anchor, CellRef, ScreenPos, Surface, TabExpander, View};
use crate::buffer::TextBuffer;
use crate::constants::defaults::TAB_WIDTH;
use crate::constants::ui::BLANK;
use tracing::trace;

/// Start scalar of every screen row `content` occupies at `width`.
///
/// Each row expands `content[start..]` and takes the first `width` cells.
/// When that overflows, the next row starts after the scalar drawn in the
/// last column, so a tab straddling the edge is cut short. Always yields at
/// least one row.
#[must_use]
pub fn row_starts(content: &[char], width: usize, tab_width: usize) -> Vec<usize> {
    let mut starts = vec![0];
    if width == 0 {
        return starts;
    }
    let mut start = 0;
    loop {
        let tabs = TabExpander::new(&content[start..], tab_width);
        if tabs.visual_len() <= width {
            break;
        }
        start += tabs.char_at(width - 1).unwrap_or(0) + 1;
        if start >= content.len() {
            break;
        }
        starts.push(start);
    }
    starts
}

/// Row of `starts` that draws scalar `ch`
fn row_of(starts: &[usize], ch: usize) -> usize {
    starts.partition_point(|&s| s <= ch).saturating_sub(1)
}

/// Wrapping view over the whole document
#[derive(Debug, Clone)]
pub struct Wrap {
    width: usize,
    height: usize,
    tab_width: usize,
    anchor: Anchor,
}

impl Wrap {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Wrap {
            width,
            height,
            tab_width: TAB_WIDTH,
            anchor: Anchor::default(),
        }
    }

    #[must_use]
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Buffer position drawn in the top-left cell so that the anchor lands
    /// on its requested row
    #[must_use]
    pub fn find_start(&self, buf: &TextBuffer) -> (usize, usize) {
        let line = self.anchor.line.min(buf.nlines() - 1);
        let rows = row_starts(buf.content(line), self.width, self.tab_width);
        let k = row_of(&rows, self.anchor.ch);

        if self.anchor.row <= k {
            return (line, rows[k - self.anchor.row]);
        }

        let mut budget = self.anchor.row - k;
        let mut l = line;
        while l > 0 {
            l -= 1;
            let rows = row_starts(buf.content(l), self.width, self.tab_width);
            let h = rows.len();
            if h >= budget {
                trace!(line = l, row = h - budget, "render start inside wrapped line");
                return (l, rows[h - budget]);
            }
            budget -= h;
        }
        trace!(budget, "render start clamped to document top");
        (0, 0)
    }
}

impl View for Wrap {
    fn render<'a>(&mut self, buf: &'a TextBuffer) -> Box<dyn Surface + 'a> {
        let (w, h) = (self.width, self.height);
        let mut surf = WrapSurface {
            buf,
            width: w,
            height: h,
            cells: vec![CellRef::default(); w * h],
            first_line: 0,
            positions: Vec::new(),
        };
        if w == 0 || h == 0 {
            return Box::new(surf);
        }

        let (start_line, start_ch) = self.find_start(buf);
        surf.first_line = start_line;

        let mut y = 0;
        let mut l = start_line;
        let mut first_row = {
            let rows = row_starts(buf.content(l), w, self.tab_width);
            row_of(&rows, start_ch)
        };

        while y < h && l < buf.nlines() {
            let content = buf.content(l);
            let rows = row_starts(content, w, self.tab_width);
            let mut positions = vec![None; content.len() + 1];

            for r in first_row..rows.len() {
                if y >= h {
                    break;
                }
                let start = rows[r];
                let tabs = TabExpander::new(&content[start..], self.tab_width);
                for x in 0..w {
                    let ch = tabs.char_at(x).map(|c| start + c);
                    surf.cells[y * w + x] = CellRef { line: Some(l), ch };
                    if let Some(c) = ch {
                        positions[c].get_or_insert((x, y));
                    }
                }
                if r == rows.len() - 1 {
                    // end-of-line slot sits on the first padding cell, or on
                    // the last column when the row is full
                    let x = tabs.visual_len().min(w - 1);
                    positions[content.len()].get_or_insert((x, y));
                }
                y += 1;
            }

            surf.positions.push(positions);
            l += 1;
            first_row = 0;
        }

        Box::new(surf)
    }

    fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn set_ref(&mut self, anchor: Anchor) {
        self.anchor = anchor;
    }

    fn set_tab_width(&mut self, tab_width: usize) {
        self.tab_width = tab_width;
    }
}

/// One rendered frame of a [`Wrap`] view
struct WrapSurface<'a> {
    buf: &'a TextBuffer,
    width: usize,
    height: usize,
    cells: Vec<CellRef>,
    first_line: usize,
    /// Screen position of each addressable position, per visited line
    positions: Vec<Vec<Option<ScreenPos>>>,
}

impl WrapSurface<'_> {
    fn cell(&self, x: usize, y: usize) -> CellRef {
        if x >= self.width || y >= self.height {
            return CellRef::default();
        }
        self.cells[y * self.width + x]
    }
}

impl Surface for WrapSurface<'_> {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn line_at(&self, x: usize, y: usize) -> Option<usize> {
        self.cell(x, y).line
    }

    fn char_at(&self, x: usize, y: usize) -> Option<usize> {
        self.cell(x, y).ch
    }

    fn rune_at(&self, x: usize, y: usize) -> char {
        match self.cell(x, y) {
            CellRef {
                line: Some(line),
                ch: Some(ch),
            } => {
                let r = self.buf.rune(line, ch);
                if r.is_control() {
                    BLANK
                } else {
                    r
                }
            }
            _ => BLANK,
        }
    }

    fn render_pos(&self, line: usize, ch: usize) -> Option<ScreenPos> {
        let idx = line.checked_sub(self.first_line)?;
        self.positions.get(idx)?.get(ch).copied().flatten()
    }
}
