//! Test utilities
//! Shared testing helpers and mocks

use crate::buffer::TextBuffer;
use crate::key::Key;
use crate::session::Session;
use crate::settings::Settings;
use crate::term::{Event, Size, TerminalBackend};
use std::collections::VecDeque;
use std::path::PathBuf;

/// Mock terminal backend for testing
/// Replays scripted events and records what was drawn
pub struct MockTerminal {
    pub events: VecDeque<Event>,
    pub screen: Vec<Vec<char>>,
    pub cursor: (u16, u16),
    pub cursor_visible: bool,
    pub size: (u16, u16),
    pub init_calls: usize,
    pub deinit_calls: usize,
    pub flushes: usize,
}

impl MockTerminal {
    /// Create a new mock terminal with specified dimensions
    pub fn new(rows: u16, cols: u16) -> Self {
        MockTerminal {
            events: VecDeque::new(),
            screen: vec![vec![' '; cols as usize]; rows as usize],
            cursor: (0, 0),
            cursor_visible: true,
            size: (rows, cols),
            init_calls: 0,
            deinit_calls: 0,
            flushes: 0,
        }
    }

    /// Queue key presses
    pub fn with_keys(mut self, keys: &[Key]) -> Self {
        self.events.extend(keys.iter().map(|&k| Event::Key(k)));
        self
    }

    /// Queue typed text, one key per character
    pub fn with_text(mut self, text: &str) -> Self {
        self.events.extend(text.chars().map(|c| Event::Key(Key::Char(c))));
        self
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Contents of screen row `y`
    pub fn row(&self, y: usize) -> String {
        self.screen[y].iter().collect()
    }
}

impl TerminalBackend for MockTerminal {
    fn init(&mut self) -> Result<(), String> {
        self.init_calls += 1;
        Ok(())
    }

    fn deinit(&mut self) {
        self.deinit_calls += 1;
    }

    fn get_size(&self) -> Result<Size, String> {
        Ok(Size {
            rows: self.size.0,
            cols: self.size.1,
        })
    }

    fn set_cell(&mut self, x: u16, y: u16, ch: char) -> Result<(), String> {
        let cell = self
            .screen
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
            .ok_or_else(|| format!("cell ({x}, {y}) outside {:?}", self.size))?;
        *cell = ch;
        Ok(())
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> Result<(), String> {
        self.cursor = (row, col);
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<(), String> {
        self.cursor_visible = false;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<(), String> {
        self.cursor_visible = true;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<(), String> {
        let (rows, cols) = self.size;
        self.screen = vec![vec![' '; cols as usize]; rows as usize];
        Ok(())
    }

    fn flush(&mut self) -> Result<(), String> {
        self.flushes += 1;
        Ok(())
    }

    fn poll_event(&mut self) -> Result<Event, String> {
        let event = self
            .events
            .pop_front()
            .ok_or_else(|| "no more scripted events".to_string())?;
        if let Event::Resize(size) = event {
            self.size = (size.rows, size.cols);
            self.clear_screen()?;
        }
        Ok(event)
    }
}

/// Session over `text` with a `width` x `height` main view and no gutter
pub fn session(text: &str, width: usize, height: usize) -> Session {
    let settings = Settings {
        show_line_numbers: false,
        ..Settings::default()
    };
    session_with(text, width, height, settings)
}

/// Session over `text` with explicit settings. `height` excludes the status row.
pub fn session_with(text: &str, width: usize, height: usize, settings: Settings) -> Session {
    Session::new(
        TextBuffer::new(text),
        PathBuf::from("scratch.txt"),
        settings,
        width,
        height + 1,
    )
}
