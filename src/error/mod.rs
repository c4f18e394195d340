//! Centralized error handling for wren
//! Defines the structured error type, severity levels, and error categories
//!
//! ## error/ Invariants
//!
//! - Recoverable failures travel as `EditorError` values and end up on the status line.
//! - Quitting is a mode transition, never an error.
//! - Out-of-range buffer offsets are bugs and panic instead of producing an error.

use std::fmt;

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational message (not really an error)
    Info,
    /// Something might be wrong but editing can continue
    Warning,
    /// The operation failed but the editor can continue
    Error,
    /// The editor cannot start or keep running
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// File system or I/O errors
    Io,
    /// Malformed input data (e.g. a file that is not UTF-8)
    Parse,
    /// Search pattern errors
    Search,
    /// Terminal backend errors
    Terminal,
    /// Internal logic or invariant violations
    Internal,
    /// Errors that don't fit other categories
    Other,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "IO"),
            Self::Parse => write!(f, "Parse"),
            Self::Search => write!(f, "Search"),
            Self::Terminal => write!(f, "Terminal"),
            Self::Internal => write!(f, "Internal"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A structured error in wren
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorError {
    /// How serious the error is
    pub severity: ErrorSeverity,
    /// What kind of error occurred
    pub kind: ErrorType,
    /// Machine-readable error code (see `constants::errors`)
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl EditorError {
    /// Create a new standard error (Severity: Error)
    pub fn new(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Error,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new critical error (Severity: Critical)
    pub fn critical(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Critical,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a new warning (Severity: Warning)
    pub fn warning(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Warning,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Whether the event loop may keep running after this error
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        self.severity < ErrorSeverity::Critical
    }

    /// Check if the message contains a substring (useful for tests)
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}({}): {}",
            self.severity, self.kind, self.code, self.message
        )
    }
}

impl std::error::Error for EditorError {}

impl From<String> for EditorError {
    fn from(msg: String) -> Self {
        Self::new(ErrorType::Other, crate::constants::errors::GENERIC_ERROR, msg)
    }
}

impl From<&str> for EditorError {
    fn from(msg: &str) -> Self {
        Self::new(ErrorType::Other, crate::constants::errors::GENERIC_ERROR, msg)
    }
}

impl From<std::io::Error> for EditorError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorType::Io, crate::constants::errors::IO_ERROR, err.to_string())
    }
}
