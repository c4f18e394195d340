//! Line number gutter
//!
//! Decorates another view with leading columns holding 1-based line numbers.

use super::{Anchor, ScreenPos, Surface, View};
use crate::buffer::TextBuffer;
use crate::constants::ui::BLANK;

/// Number of decimal digits in `n`
fn digits(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Gutter width for a document of `nlines` lines: the digits plus one blank column
#[must_use]
pub fn gutter_width(nlines: usize) -> usize {
    digits(nlines) + 1
}

/// View decorator that reserves a line number gutter on the left
#[derive(Debug, Clone)]
pub struct LineNumbers<V: View> {
    inner: V,
    width: usize,
    height: usize,
    gutter: usize,
}

impl<V: View> LineNumbers<V> {
    /// Wrap `inner`; its current size becomes the size of the decorated view
    pub fn new(inner: V) -> Self {
        let (width, height) = inner.size();
        LineNumbers {
            inner,
            width,
            height,
            gutter: 0,
        }
    }

    /// Gutter width used by the most recent render
    #[cfg(test)]
    pub(crate) fn gutter(&self) -> usize {
        self.gutter
    }

    #[cfg(test)]
    pub(crate) fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: View> View for LineNumbers<V> {
    fn render<'a>(&mut self, buf: &'a TextBuffer) -> Box<dyn Surface + 'a> {
        self.gutter = gutter_width(buf.nlines());
        self.inner
            .set_size(self.width.saturating_sub(self.gutter), self.height);
        let inner = self.inner.render(buf);

        let mut labels = Vec::with_capacity(self.height);
        let mut prev = None;
        for y in 0..self.height {
            let line = inner.line_at(0, y);
            let label = match line {
                Some(n) if line != prev => Some(
                    format!("{:>w$}{}", n + 1, BLANK, w = self.gutter - 1)
                        .chars()
                        .collect::<Vec<_>>(),
                ),
                _ => None,
            };
            labels.push(label);
            prev = line;
        }

        Box::new(GutterSurface {
            inner,
            width: self.width,
            height: self.height,
            gutter: self.gutter,
            labels,
        })
    }

    fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.inner
            .set_size(width.saturating_sub(self.gutter), height);
    }

    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn set_ref(&mut self, anchor: Anchor) {
        self.inner.set_ref(anchor);
    }

    fn set_tab_width(&mut self, tab_width: usize) {
        self.inner.set_tab_width(tab_width);
    }
}

struct GutterSurface<'a> {
    inner: Box<dyn Surface + 'a>,
    width: usize,
    height: usize,
    gutter: usize,
    /// Gutter text per row; `None` for continuation rows and rows past the end
    labels: Vec<Option<Vec<char>>>,
}

impl Surface for GutterSurface<'_> {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn line_at(&self, x: usize, y: usize) -> Option<usize> {
        self.inner.line_at(x.checked_sub(self.gutter)?, y)
    }

    fn char_at(&self, x: usize, y: usize) -> Option<usize> {
        self.inner.char_at(x.checked_sub(self.gutter)?, y)
    }

    fn rune_at(&self, x: usize, y: usize) -> char {
        if x < self.gutter {
            return self
                .labels
                .get(y)
                .and_then(Option::as_ref)
                .and_then(|label| label.get(x).copied())
                .unwrap_or(BLANK);
        }
        self.inner.rune_at(x - self.gutter, y)
    }

    fn render_pos(&self, line: usize, ch: usize) -> Option<ScreenPos> {
        self.inner
            .render_pos(line, ch)
            .map(|(x, y)| (x + self.gutter, y))
    }
}
