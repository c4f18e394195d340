//! Key representation for editor input

/// Represents a key press event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character
    Char(char),
    /// Control key combination (e.g., Ctrl+S), stored lowercase
    Ctrl(u8),
    /// Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Editing keys
    Backspace,
    Delete,
    Enter,
    Escape,
    Tab,
    /// Anything the editor has no binding for
    Unknown,
}

impl Key {
    /// The character this key would insert, if any
    #[must_use]
    pub fn printable(self) -> Option<char> {
        match self {
            Key::Char(ch) if !ch.is_control() => Some(ch),
            _ => None,
        }
    }

    /// Whether this is the Ctrl combination for `ch`
    #[must_use]
    pub fn is_ctrl(self, ch: char) -> bool {
        matches!(self, Key::Ctrl(b) if b == ch.to_ascii_lowercase() as u8)
    }
}
