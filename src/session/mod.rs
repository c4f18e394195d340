//! Editing session
//!
//! Owns the buffer, the cursor and the scroll pivot, and keeps the cursor on
//! screen by consulting the view before every move.
//!
//! ## session/ Invariants
//!
//! - The cursor line is always in `[0, nlines)` and its char in `[0, line_len]`.
//! - The pivot is the screen row the cursor is drawn on, and stays below `height`.
//! - A move to an already visible position never scrolls.
//! - Search matches always describe the current buffer contents.

use crate::buffer::TextBuffer;
use crate::constants::ui::STATUS_ROWS;
use crate::document;
use crate::error::EditorError;
use crate::search::{self, Pattern};
use crate::settings::Settings;
use crate::term::TerminalBackend;
use crate::view::{Anchor, LineNumbers, View, Wrap};
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct Session {
    buf: TextBuffer,
    path: PathBuf,
    settings: Settings,
    view: Box<dyn View>,
    /// Size of the main view; the status row sits below it
    width: usize,
    height: usize,
    line: usize,
    ch: usize,
    pivot: usize,
    pattern: Option<Pattern>,
    /// Byte ranges of the current pattern's matches
    matches: Vec<Range<usize>>,
    status: Option<String>,
}

impl Session {
    /// Create a session for a terminal of `width` x `term_height` cells
    pub fn new(
        buf: TextBuffer,
        path: PathBuf,
        settings: Settings,
        width: usize,
        term_height: usize,
    ) -> Self {
        let height = term_height.saturating_sub(STATUS_ROWS);
        let wrap = Wrap::new(width, height).with_tab_width(settings.tab_width);
        let view: Box<dyn View> = if settings.show_line_numbers {
            Box::new(LineNumbers::new(wrap))
        } else {
            Box::new(wrap)
        };

        Session {
            buf,
            path,
            settings,
            view,
            width,
            height,
            line: 0,
            ch: 0,
            pivot: 0,
            pattern: None,
            matches: Vec::new(),
            status: None,
        }
    }

    #[must_use]
    pub fn buffer(&self) -> &TextBuffer {
        &self.buf
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Cursor as `(line, char)`
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        (self.line, self.ch)
    }

    #[must_use]
    pub fn pivot(&self) -> usize {
        self.pivot
    }

    /// Size of the main view, without the status row
    #[must_use]
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn matches(&self) -> &[Range<usize>] {
        &self.matches
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    fn anchor(&self) -> Anchor {
        Anchor {
            line: self.line,
            ch: self.ch,
            row: self.pivot,
        }
    }

    /// Move the cursor to `(line, ch)`, keeping `None` axes as they are.
    ///
    /// The target is clamped into the document. If it is already on screen
    /// the pivot follows it; otherwise the view scrolls so that it lands on
    /// the bottom row (moving down) or the top row (moving up).
    pub fn set_cursor(&mut self, line: Option<usize>, ch: Option<usize>) {
        let line = line.unwrap_or(self.line).min(self.buf.nlines() - 1);
        let ch = ch.unwrap_or(self.ch).min(self.buf.line_len(line));

        self.view.set_ref(self.anchor());
        let surf = self.view.render(&self.buf);

        let pivot = match surf.render_pos(line, ch) {
            Some((_, y)) => y,
            None if line > self.line => {
                debug!(line, "scroll down");
                self.height.saturating_sub(1)
            }
            None if line < self.line => {
                debug!(line, "scroll up");
                0
            }
            None => self.pivot,
        };

        self.pivot = pivot;
        self.line = line;
        self.ch = ch;
    }

    pub fn move_cursor_x(&mut self, dx: isize) {
        self.set_cursor(None, Some(self.ch.saturating_add_signed(dx)));
    }

    pub fn move_cursor_y(&mut self, dy: isize) {
        self.set_cursor(Some(self.line.saturating_add_signed(dy)), None);
    }

    pub fn goto_top(&mut self) {
        self.set_cursor(Some(0), Some(0));
    }

    /// Move to the start of the last line and pin it to the bottom row
    pub fn goto_bottom(&mut self) {
        self.set_cursor(Some(self.buf.nlines() - 1), Some(0));
        self.pivot = self.height.saturating_sub(1);
    }

    pub fn goto_line_end(&mut self) {
        self.set_cursor(None, Some(usize::MAX));
    }

    /// Offset of the cursor in the buffer
    #[must_use]
    pub fn offset(&self) -> usize {
        self.buf.offset(self.line, self.ch)
    }

    fn set_cursor_offset(&mut self, offset: usize) {
        let (line, ch) = self.buf.pos(offset);
        self.set_cursor(Some(line), Some(ch));
    }

    /// Insert `chars` at the cursor and move past them
    pub fn insert(&mut self, chars: &[char]) {
        let offset = self.offset();
        let n = self.buf.insert(offset, chars);
        self.set_cursor_offset(offset + n);
        self.update_search();
    }

    /// Delete `n` chars after the cursor, or `|n|` before it when negative.
    /// Counts are clamped to what the document holds.
    pub fn delete(&mut self, n: isize) {
        let offset = self.offset();
        let n = if n >= 0 {
            n.min((self.buf.len() - offset) as isize)
        } else {
            n.max(-(offset as isize))
        };
        if n == 0 {
            return;
        }
        let removed = self.buf.delete(offset, n);
        let offset = if n < 0 { offset - removed } else { offset };
        self.set_cursor_offset(offset);
        self.update_search();
    }

    /// Break the line at the cursor, carrying indentation when enabled
    pub fn newline(&mut self) {
        let mut text = vec!['\n'];
        if self.settings.smart_indent {
            let indent = self.buf.content(self.line)[..self.ch]
                .iter()
                .take_while(|&&c| c == ' ' || c == '\t');
            text.extend(indent);
        }
        self.insert(&text);
    }

    /// Insert whatever the Tab key stands for
    pub fn insert_tab(&mut self) {
        let text = self.settings.tab_text();
        self.insert(&text);
    }

    /// Compile `query`, store its matches and jump to the first match at or
    /// after the cursor. An invalid query leaves everything untouched.
    pub fn search(&mut self, query: &str) -> Result<(), EditorError> {
        let pattern = Pattern::compile(query)?;
        let matches = pattern.find_all(&self.buf.to_string());
        debug!(query, matches = matches.len(), "search");

        let cursor = self.buf.char_to_byte(self.offset());
        let target = search::first_at_or_after(&matches, cursor).map(|m| m.start);

        self.pattern = Some(pattern);
        self.matches = matches;
        match target {
            Some(byte) => self.jump_to_byte(byte),
            None => self.set_status(format!("Pattern not found: {query}")),
        }
        Ok(())
    }

    /// Jump to the first match after the cursor. Returns false when there is none.
    pub fn next_match(&mut self) -> bool {
        let cursor = self.buf.char_to_byte(self.offset());
        match search::next_after(&self.matches, cursor).map(|m| m.start) {
            Some(byte) => {
                self.jump_to_byte(byte);
                true
            }
            None => false,
        }
    }

    fn jump_to_byte(&mut self, byte: usize) {
        let offset = self.buf.byte_to_char(byte);
        self.set_cursor_offset(offset);
    }

    fn update_search(&mut self) {
        if let Some(pattern) = &self.pattern {
            self.matches = pattern.find_all(&self.buf.to_string());
        }
    }

    /// Adapt to a terminal of `width` x `term_height` cells
    pub fn resize(&mut self, width: usize, term_height: usize) {
        self.width = width;
        self.height = term_height.saturating_sub(STATUS_ROWS);
        self.view.set_size(self.width, self.height);
        self.pivot = self.pivot.min(self.height.saturating_sub(1));
        debug!(width, height = self.height, "resize");
    }

    /// Write the buffer to the session's file
    pub fn save(&mut self) -> Result<(), EditorError> {
        document::save(&self.path, &self.buf)?;
        self.set_status(format!(
            "\"{}\" {}L written",
            self.path.display(),
            self.buf.nlines()
        ));
        Ok(())
    }

    /// Paint the main view and place the terminal cursor on the cursor cell
    pub fn draw<T: TerminalBackend + ?Sized>(&mut self, term: &mut T) -> Result<(), String> {
        self.view.set_ref(self.anchor());
        let surf = self.view.render(&self.buf);
        let (w, h) = surf.size();

        for y in 0..h {
            for x in 0..w {
                term.set_cell(x as u16, y as u16, surf.rune_at(x, y))?;
            }
        }

        match surf.render_pos(self.line, self.ch) {
            Some((x, y)) => {
                term.move_cursor(y as u16, x as u16)?;
                term.show_cursor()
            }
            None => term.hide_cursor(),
        }
    }

    /// Paint `text` on the status row, blank-filling the rest
    pub fn draw_status<T: TerminalBackend + ?Sized>(
        &self,
        term: &mut T,
        text: &str,
    ) -> Result<(), String> {
        let mut chars = text.chars();
        for x in 0..self.width {
            let ch = chars.next().filter(|c| !c.is_control()).unwrap_or(' ');
            term.set_cell(x as u16, self.height as u16, ch)?;
        }
        Ok(())
    }

    /// Row the status line is drawn on
    #[must_use]
    pub fn status_row(&self) -> usize {
        self.height
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
