//! Modal key handling
//!
//! Each mode consumes one key at a time, acts on the session and names the
//! mode that handles the next key.
//!
//! ## mode/ Invariants
//!
//! - Exactly one mode is active; handling a key consumes it and yields the next.
//! - Quitting is reported as `Transition::Quit`, never as an error.
//! - Failed saves and bad search patterns leave the editor running.

use crate::buffer::TextBuffer;
use crate::constants::modes;
use crate::constants::ui::SEARCH_PROMPT;
use crate::error::EditorError;
use crate::key::Key;
use crate::session::Session;
use crate::term::TerminalBackend;
use crate::view::{Anchor, View, Wrap};
use tracing::debug;

/// Editor operating mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Navigation. `pending` holds the first key of a two-key command.
    Edit { pending: Option<char> },
    /// Text entry
    Insert,
    /// Typing a search query; `pos` is the cursor within the query
    Search { query: TextBuffer, pos: usize },
}

/// What follows a handled key
#[derive(Debug)]
pub enum Transition {
    Next(Mode),
    /// Continue in the mode but surface a recoverable error
    Report(Mode, EditorError),
    Quit,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::edit()
    }
}

impl Mode {
    #[must_use]
    pub fn edit() -> Self {
        Mode::Edit { pending: None }
    }

    #[must_use]
    pub fn search() -> Self {
        Mode::Search {
            query: TextBuffer::default(),
            pos: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Edit { .. } => modes::EDIT,
            Mode::Insert => modes::INSERT,
            Mode::Search { .. } => modes::SEARCH,
        }
    }

    /// Handle `key`, consuming this mode
    pub fn handle_key(self, session: &mut Session, key: Key) -> Transition {
        let from = self.name();
        let transition = match self {
            Mode::Edit { pending } => handle_edit(pending, session, key),
            Mode::Insert => handle_insert(session, key),
            Mode::Search { query, pos } => handle_search(query, pos, session, key),
        };
        if let Transition::Next(next) | Transition::Report(next, _) = &transition {
            if next.name() != from {
                debug!(from, to = next.name(), "mode change");
            }
        }
        transition
    }

    /// Paint the status row for this mode
    pub fn draw_status<T: TerminalBackend + ?Sized>(
        &self,
        session: &Session,
        term: &mut T,
    ) -> Result<(), String> {
        match self {
            Mode::Search { query, pos } => draw_query(query, *pos, session, term),
            Mode::Insert => {
                let text = session.status().unwrap_or("-- INSERT --");
                session.draw_status(term, text)
            }
            Mode::Edit { .. } => session.draw_status(term, session.status().unwrap_or("")),
        }
    }
}

/// Ctrl-Q and Ctrl-S, shared by Edit and Insert. `stay` is the mode to
/// continue in after a save.
fn handle_common(s: &mut Session, key: Key, stay: Mode) -> Option<Transition> {
    if key.is_ctrl('q') {
        return Some(Transition::Quit);
    }
    if key.is_ctrl('s') {
        return Some(match s.save() {
            Ok(()) => Transition::Next(stay),
            Err(e) => Transition::Report(stay, e),
        });
    }
    None
}

fn handle_edit(pending: Option<char>, s: &mut Session, key: Key) -> Transition {
    if let Some(transition) = handle_common(s, key, Mode::edit()) {
        return transition;
    }

    match (pending, key) {
        (Some('g'), Key::Char('g')) => s.goto_top(),
        // Any other key after a prefix only cancels the prefix
        (Some(_), Key::Char(_)) => {}
        (None, Key::Char(ch)) => match ch {
            'i' => return Transition::Next(Mode::Insert),
            'o' => {
                s.goto_line_end();
                s.newline();
                return Transition::Next(Mode::Insert);
            }
            '/' => return Transition::Next(Mode::search()),
            'g' => return Transition::Next(Mode::Edit { pending: Some('g') }),
            'h' => s.move_cursor_x(-1),
            'l' | ' ' => s.move_cursor_x(1),
            'j' => s.move_cursor_y(1),
            'k' => s.move_cursor_y(-1),
            'G' => s.goto_bottom(),
            'x' => s.delete(1),
            'n' => {
                s.next_match();
            }
            _ => {}
        },
        (_, Key::Enter) | (_, Key::ArrowDown) => s.move_cursor_y(1),
        (_, Key::ArrowUp) => s.move_cursor_y(-1),
        (_, Key::Backspace) | (_, Key::ArrowLeft) => s.move_cursor_x(-1),
        (_, Key::ArrowRight) => s.move_cursor_x(1),
        _ => {}
    }
    Transition::Next(Mode::edit())
}

fn handle_insert(s: &mut Session, key: Key) -> Transition {
    if let Some(transition) = handle_common(s, key, Mode::Insert) {
        return transition;
    }

    match key {
        Key::Escape => {
            s.move_cursor_x(-1);
            return Transition::Next(Mode::edit());
        }
        Key::Enter => s.newline(),
        Key::Backspace => s.delete(-1),
        Key::Delete => s.delete(1),
        Key::Tab => s.insert_tab(),
        Key::ArrowUp => s.move_cursor_y(-1),
        Key::ArrowDown => s.move_cursor_y(1),
        Key::ArrowLeft => s.move_cursor_x(-1),
        Key::ArrowRight => s.move_cursor_x(1),
        _ => {
            if let Some(ch) = key.printable() {
                s.insert(&[ch]);
            }
        }
    }
    Transition::Next(Mode::Insert)
}

fn handle_search(mut query: TextBuffer, mut pos: usize, s: &mut Session, key: Key) -> Transition {
    match key {
        Key::Escape => return Transition::Next(Mode::edit()),
        Key::Enter => {
            if query.is_empty() {
                return Transition::Next(Mode::edit());
            }
            return match s.search(&query.to_string()) {
                Ok(()) => Transition::Next(Mode::edit()),
                Err(e) => Transition::Report(Mode::edit(), e),
            };
        }
        Key::Backspace if pos > 0 => {
            query.delete(pos, -1);
            pos -= 1;
        }
        Key::ArrowLeft => pos = pos.saturating_sub(1),
        Key::ArrowRight => pos = (pos + 1).min(query.len()),
        _ => {
            if let Some(ch) = key.printable() {
                pos += query.insert(pos, &[ch]);
            }
        }
    }
    Transition::Next(Mode::Search { query, pos })
}

/// Prompt plus a one-row preview of the query, cursor on the query position
fn draw_query<T: TerminalBackend + ?Sized>(
    query: &TextBuffer,
    pos: usize,
    session: &Session,
    term: &mut T,
) -> Result<(), String> {
    let (width, _) = session.size();
    let row = session.status_row() as u16;
    session.draw_status(term, "")?;
    if width == 0 {
        return Ok(());
    }
    term.set_cell(0, row, SEARCH_PROMPT)?;

    let mut preview = Wrap::new(width - 1, 1).with_tab_width(1);
    preview.set_ref(Anchor {
        line: 0,
        ch: pos,
        row: 0,
    });
    let surf = preview.render(query);
    for x in 0..width - 1 {
        term.set_cell(x as u16 + 1, row, surf.rune_at(x, 0))?;
    }
    if let Some((x, _)) = surf.render_pos(0, pos) {
        term.move_cursor(row, x as u16 + 1)?;
        term.show_cursor()?;
    }
    Ok(())
}
