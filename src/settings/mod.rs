//! Editor settings
//!
//! Values start from `constants::defaults` and are overridden by command line
//! flags before the session is created.

use crate::constants::defaults;

/// Options that shape rendering and editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Cells a tab expands to when drawn
    pub tab_width: usize,
    /// Insert spaces instead of a tab character for the Tab key
    pub expand_tabs: bool,
    /// Draw the line number gutter
    pub show_line_numbers: bool,
    /// Carry leading whitespace into new lines
    pub smart_indent: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            tab_width: defaults::TAB_WIDTH,
            expand_tabs: defaults::EXPAND_TABS,
            show_line_numbers: defaults::SHOW_LINE_NUMBERS,
            smart_indent: defaults::SMART_INDENT,
        }
    }
}

impl Settings {
    /// Text the Tab key inserts
    #[must_use]
    pub fn tab_text(&self) -> Vec<char> {
        if self.expand_tabs {
            vec![' '; self.tab_width]
        } else {
            vec!['\t']
        }
    }
}
