//! Global constants for the wren editor

pub mod errors {
    // Error Codes
    pub const GENERIC_ERROR: &str = "GENERIC_ERROR";
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const LOAD_FAILED: &str = "LOAD_FAILED";
    pub const SAVE_FAILED: &str = "SAVE_FAILED";
    pub const UTF8_ERROR: &str = "UTF8_ERROR";
    pub const REGEX_COMPILE_ERROR: &str = "REGEX_COMPILE_ERROR";
    pub const TERMINAL_INIT_FAILED: &str = "TERMINAL_INIT_FAILED";
    pub const POLL_FAILED: &str = "POLL_FAILED";
    pub const RENDER_FAILED: &str = "RENDER_FAILED";
}

pub mod modes {
    pub const EDIT: &str = "EDIT";
    pub const INSERT: &str = "INSERT";
    pub const SEARCH: &str = "SEARCH";
}

pub mod ui {
    /// Prompt drawn before the search query preview
    pub const SEARCH_PROMPT: char = '/';

    /// Rows reserved below the main view for the status line
    pub const STATUS_ROWS: usize = 1;

    /// Character drawn for cells with nothing behind them
    pub const BLANK: char = ' ';
}

pub mod defaults {
    pub const TAB_WIDTH: usize = 4;
    pub const EXPAND_TABS: bool = true;
    pub const SHOW_LINE_NUMBERS: bool = true;
    pub const SMART_INDENT: bool = true;

    /// Default filter for the log file when `RUST_LOG` is unset
    pub const LOG_FILTER: &str = "info";
}
