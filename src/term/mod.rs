//! Terminal backend abstraction
//! Provides platform-agnostic interface for terminal operations
//!
//! ## term/ Invariants
//!
//! - Raw mode is enabled before input processing begins.
//! - Terminal state is restored on normal exit and on panic.
//! - Drawing is buffered until `flush`.
//! - Terminal code never depends on editor internals beyond `Key`.

use crate::key::Key;

/// Terminal size information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub rows: u16,
    pub cols: u16,
}

/// Input delivered by the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key(Key),
    Resize(Size),
    /// Mouse input is reported but not acted on
    Mouse,
}

/// Terminal backend trait
/// All terminal backends must implement these operations
pub trait TerminalBackend {
    /// Initialize terminal and enter raw mode
    fn init(&mut self) -> Result<(), String>;

    /// Restore terminal to original state
    fn deinit(&mut self);

    /// Get terminal dimensions
    fn get_size(&self) -> Result<Size, String>;

    /// Draw `ch` at column `x`, row `y`
    fn set_cell(&mut self, x: u16, y: u16, ch: char) -> Result<(), String>;

    /// Move cursor to specified position (0-indexed)
    fn move_cursor(&mut self, row: u16, col: u16) -> Result<(), String>;

    fn hide_cursor(&mut self) -> Result<(), String>;

    fn show_cursor(&mut self) -> Result<(), String>;

    /// Clear entire screen
    fn clear_screen(&mut self) -> Result<(), String>;

    /// Push everything drawn since the last flush to the screen
    fn flush(&mut self) -> Result<(), String>;

    /// Block until the next key, resize or mouse event
    fn poll_event(&mut self) -> Result<Event, String>;
}

pub mod crossterm;
