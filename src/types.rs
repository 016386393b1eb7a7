// src/types.rs
use serde::{Deserialize, Serialize};

/// A `(line, column)` position inside a source file. Compared lexicographically.
pub type Position = (u32, u32);

/// A single covered region of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
    /// Number of statements the region declares.
    pub statements: u32,
    /// Number of times the region was executed.
    pub hits: u64,
}

impl Range {
    #[must_use]
    pub const fn new(
        start: Position,
        end: Position,
        statements: u32,
        hits: u64,
    ) -> Self {
        Self {
            start_line: start.0,
            start_col: start.1,
            end_line: end.0,
            end_col: end.1,
            statements,
            hits,
        }
    }

    #[must_use]
    pub const fn start(&self) -> Position {
        (self.start_line, self.start_col)
    }

    #[must_use]
    pub const fn end(&self) -> Position {
        (self.end_line, self.end_col)
    }

    /// Returns true if both ranges cover exactly the same span.
    #[must_use]
    pub fn same_span(&self, other: &Self) -> bool {
        self.start() == other.start() && self.end() == other.end()
    }
}

/// All coverage for one source file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileReport {
    pub file_name: String,
    /// Coverage mode label (`set`, `count`, `atomic`). Passed through untouched.
    pub mode: String,
    pub ranges: Vec<Range>,
}

impl FileReport {
    /// Creates an empty report for `file_name`.
    #[must_use]
    pub fn new(file_name: impl Into<String>, mode: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            mode: mode.into(),
            ranges: Vec::new(),
        }
    }

    /// Creates a report holding `ranges`.
    #[must_use]
    pub fn with_ranges(
        file_name: impl Into<String>,
        mode: impl Into<String>,
        ranges: Vec<Range>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mode: mode.into(),
            ranges,
        }
    }
}
