//! Editor core
//! Event loop tying the terminal, the session and the active mode together

use crate::buffer::TextBuffer;
use crate::constants::errors::{POLL_FAILED, RENDER_FAILED, TERMINAL_INIT_FAILED};
use crate::error::{EditorError, ErrorType};
use crate::key::Key;
use crate::mode::{Mode, Transition};
use crate::session::Session;
use crate::settings::Settings;
use crate::term::{Event, Size, TerminalBackend};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main editor struct
pub struct Editor<T: TerminalBackend> {
    /// Terminal backend
    pub term: T,
    session: Session,
    mode: Mode,
    size: Size,
    needs_clear: bool,
}

impl<T: TerminalBackend> Editor<T> {
    /// Take over the terminal and open `buf`, which is saved back to `path`
    pub fn new(
        mut term: T,
        buf: TextBuffer,
        path: PathBuf,
        settings: Settings,
    ) -> Result<Self, EditorError> {
        term.init().map_err(|e| {
            EditorError::critical(ErrorType::Terminal, TERMINAL_INIT_FAILED, e)
        })?;

        let size = match term.get_size() {
            Ok(size) => size,
            Err(e) => {
                term.deinit();
                return Err(EditorError::critical(
                    ErrorType::Terminal,
                    TERMINAL_INIT_FAILED,
                    e,
                ));
            }
        };
        info!(rows = size.rows, cols = size.cols, path = %path.display(), "editor started");

        let session = Session::new(
            buf,
            path,
            settings,
            size.cols as usize,
            size.rows as usize,
        );
        Ok(Editor {
            term,
            session,
            mode: Mode::default(),
            size,
            needs_clear: true,
        })
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Run until the user quits or the terminal fails
    pub fn run(&mut self) -> Result<(), EditorError> {
        loop {
            self.render()?;

            let event = self.term.poll_event().map_err(|e| {
                EditorError::critical(ErrorType::Terminal, POLL_FAILED, e)
            })?;

            match event {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        info!("quit");
                        return Ok(());
                    }
                }
                Event::Resize(size) => {
                    self.size = size;
                    self.session
                        .resize(size.cols as usize, size.rows as usize);
                    self.needs_clear = true;
                }
                Event::Mouse => {}
            }
        }
    }

    /// Dispatch one key to the active mode. Returns true when the editor should quit.
    fn handle_key(&mut self, key: Key) -> bool {
        self.session.clear_status();
        let mode = std::mem::take(&mut self.mode);
        match mode.handle_key(&mut self.session, key) {
            Transition::Next(next) => self.mode = next,
            Transition::Report(next, err) => {
                warn!(%err, "recoverable error");
                self.session.set_status(err.message);
                self.mode = next;
            }
            Transition::Quit => return true,
        }
        false
    }

    fn render(&mut self) -> Result<(), EditorError> {
        self.paint()
            .map_err(|e| EditorError::critical(ErrorType::Terminal, RENDER_FAILED, e))
    }

    fn paint(&mut self) -> Result<(), String> {
        if self.needs_clear {
            self.term.clear_screen()?;
            self.needs_clear = false;
        }
        self.session.draw(&mut self.term)?;
        if self.size.rows > 0 {
            self.mode.draw_status(&self.session, &mut self.term)?;
        }
        self.term.flush()
    }
}

impl<T: TerminalBackend> Drop for Editor<T> {
    fn drop(&mut self) {
        self.term.deinit();
    }
}
