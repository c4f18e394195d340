//! Views over a text buffer
//!
//! A [`View`] turns a buffer into a [`Surface`]: a frame that maps screen
//! cells to buffer positions and buffer positions to screen cells.
//!
//! ## view/ Invariants
//!
//! - Views never mutate the buffer.
//! - A surface is valid only for the buffer state it was rendered from.
//! - Each buffer position maps to at most one cell, the first one drawn.
//! - If `render_pos(l, c) == Some((x, y))` then `(x, y)` maps back to `(l, c)`,
//!   except for the end-of-line slot, which is placed on a nearby cell.
//! - Cells with no backing line or character answer `None`.

pub mod gutter;
pub mod tabs;
pub mod wrap;

pub use gutter::LineNumbers;
pub use tabs::TabExpander;
pub use wrap::Wrap;

use crate::buffer::TextBuffer;

/// Screen cell `(x, y)`, origin top-left
pub type ScreenPos = (usize, usize);

/// Buffer position behind one screen cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellRef {
    pub line: Option<usize>,
    pub ch: Option<usize>,
}

/// Buffer position that must appear on a given screen row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchor {
    pub line: usize,
    pub ch: usize,
    pub row: usize,
}

/// One rendered frame
pub trait Surface {
    /// `(width, height)` in cells
    fn size(&self) -> (usize, usize);

    /// Line drawn at `(x, y)`
    fn line_at(&self, x: usize, y: usize) -> Option<usize>;

    /// Character drawn at `(x, y)`
    fn char_at(&self, x: usize, y: usize) -> Option<usize>;

    /// Glyph to paint at `(x, y)`
    fn rune_at(&self, x: usize, y: usize) -> char;

    /// Cell where `(line, ch)` was drawn
    fn render_pos(&self, line: usize, ch: usize) -> Option<ScreenPos>;

    fn contains(&self, line: usize, ch: usize) -> bool {
        self.render_pos(line, ch).is_some()
    }
}

/// Something that can render a buffer into a fixed-size surface
pub trait View {
    fn render<'a>(&mut self, buf: &'a TextBuffer) -> Box<dyn Surface + 'a>;

    fn set_size(&mut self, width: usize, height: usize);

    fn size(&self) -> (usize, usize);

    /// Position the next render so that `anchor` lands on `anchor.row`
    fn set_ref(&mut self, anchor: Anchor);

    fn set_tab_width(&mut self, tab_width: usize);
}
