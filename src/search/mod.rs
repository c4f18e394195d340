//! Regex search over the whole document
//!
//! The typed query is the whole pattern, `/` included, compiled
//! case-sensitively with no other flags. Matches are reported as byte ranges
//! into the UTF-8 text.

use crate::constants::errors::REGEX_COMPILE_ERROR;
use crate::error::{EditorError, ErrorType};
use monster_regex::{Flags, Regex};
use std::fmt;
use std::ops::Range;

/// A compiled search query
pub struct Pattern {
    query: String,
    re: Regex,
}

impl Pattern {
    /// Compile `query` as a regular expression
    pub fn compile(query: &str) -> Result<Self, EditorError> {
        let flags = Flags {
            ignore_case: Some(false),
            ..Flags::default()
        };
        let re = Regex::new(query, flags).map_err(|e| {
            EditorError::new(ErrorType::Search, REGEX_COMPILE_ERROR, format!("{:?}", e))
        })?;

        Ok(Pattern {
            query: query.to_string(),
            re,
        })
    }

    /// All non-overlapping matches in `text`, in order
    #[must_use]
    pub fn find_all(&self, text: &str) -> Vec<Range<usize>> {
        self.re.find_all(text).map(|m| m.start..m.end).collect()
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern").field("query", &self.query).finish()
    }
}

/// First match starting at or after `byte`, wrapping to the first match
#[must_use]
pub fn first_at_or_after(matches: &[Range<usize>], byte: usize) -> Option<&Range<usize>> {
    matches
        .iter()
        .find(|m| m.start >= byte)
        .or_else(|| matches.first())
}

/// First match starting strictly after `byte`, so a match under the cursor
/// is skipped. Does not wrap.
#[must_use]
pub fn next_after(matches: &[Range<usize>], byte: usize) -> Option<&Range<usize>> {
    matches.iter().find(|m| m.start > byte)
}
