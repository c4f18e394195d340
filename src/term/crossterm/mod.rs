//! Crossterm-based terminal backend
//! Cross-platform terminal operations using crossterm

use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, ClearType},
};
use std::io::{stdout, BufWriter, Stdout, Write};

use crate::key::Key;
use crate::term::{Event, Size, TerminalBackend};

/// Crossterm-based terminal backend implementation
pub struct CrosstermBackend {
    out: BufWriter<Stdout>,
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
}

impl CrosstermBackend {
    pub fn new() -> Result<Self, String> {
        Ok(CrosstermBackend {
            out: BufWriter::new(stdout()),
            raw_mode_enabled: false,
            alternate_screen_enabled: false,
        })
    }
}

impl TerminalBackend for CrosstermBackend {
    fn init(&mut self) -> Result<(), String> {
        // Enable alternate screen buffer (prevents scrolling in main buffer)
        execute!(self.out, terminal::EnterAlternateScreen)
            .map_err(|e| format!("Failed to enter alternate screen: {e}"))?;
        self.alternate_screen_enabled = true;

        terminal::enable_raw_mode().map_err(|e| format!("Failed to enable raw mode: {e}"))?;
        self.raw_mode_enabled = true;

        Ok(())
    }

    fn deinit(&mut self) {
        let _ = execute!(self.out, cursor::Show);

        if self.raw_mode_enabled {
            let _ = terminal::disable_raw_mode();
            self.raw_mode_enabled = false;
        }

        if self.alternate_screen_enabled {
            let _ = execute!(self.out, terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
        }
    }

    fn get_size(&self) -> Result<Size, String> {
        let (cols, rows) =
            terminal::size().map_err(|e| format!("Failed to get terminal size: {e}"))?;
        Ok(Size { rows, cols })
    }

    fn set_cell(&mut self, x: u16, y: u16, ch: char) -> Result<(), String> {
        queue!(self.out, cursor::MoveTo(x, y), Print(ch))
            .map_err(|e| format!("Failed to draw cell: {e}"))
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> Result<(), String> {
        queue!(self.out, cursor::MoveTo(col, row))
            .map_err(|e| format!("Failed to move cursor: {e}"))
    }

    fn hide_cursor(&mut self) -> Result<(), String> {
        queue!(self.out, cursor::Hide).map_err(|e| format!("Failed to hide cursor: {e}"))
    }

    fn show_cursor(&mut self) -> Result<(), String> {
        queue!(self.out, cursor::Show).map_err(|e| format!("Failed to show cursor: {e}"))
    }

    fn clear_screen(&mut self) -> Result<(), String> {
        queue!(self.out, terminal::Clear(ClearType::All))
            .map_err(|e| format!("Failed to clear screen: {e}"))
    }

    fn flush(&mut self) -> Result<(), String> {
        self.out.flush().map_err(|e| format!("Flush failed: {e}"))
    }

    fn poll_event(&mut self) -> Result<Event, String> {
        loop {
            match event::read().map_err(|e| format!("Failed to read event: {e}"))? {
                event::Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    return Ok(Event::Key(translate_key_event(key_event)));
                }
                event::Event::Resize(cols, rows) => return Ok(Event::Resize(Size { rows, cols })),
                event::Event::Mouse(_) => return Ok(Event::Mouse),
                // Ignore key releases, focus and paste events
                _ => {}
            }
        }
    }
}

/// Leave raw mode and the alternate screen without a backend at hand.
///
/// Safe to call when the terminal was never initialized.
pub fn restore_terminal() {
    let mut out = stdout();
    let _ = terminal::disable_raw_mode();
    let _ = execute!(out, cursor::Show, terminal::LeaveAlternateScreen);
}

/// Translate crossterm `KeyEvent` to our Key enum
pub(crate) fn translate_key_event(key_event: KeyEvent) -> Key {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Char(ch) => {
            // Some terminals send Enter as a character
            if ch == '\r' || ch == '\n' {
                return Key::Enter;
            }
            if ctrl {
                if ch.is_ascii() {
                    Key::Ctrl(ch.to_ascii_lowercase() as u8)
                } else {
                    Key::Unknown
                }
            } else {
                Key::Char(ch)
            }
        }
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Tab => Key::Tab,
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Left => Key::ArrowLeft,
        KeyCode::Right => Key::ArrowRight,
        _ => Key::Unknown,
    }
}
