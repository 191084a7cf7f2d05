//! Line/column coordinates as reported by a streaming parser's locator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-indexed line/column position within a document.
///
/// Streaming parsers report positions through their locator as line and
/// column numbers rather than byte offsets, so this is the unit diagnostics
/// carry. Both values are 1-indexed for display to users.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Location {
    /// The line number (1-indexed).
    pub line: u32,
    /// The column number (1-indexed).
    pub column: u32,
}

impl Location {
    /// Creates a new location from 1-indexed line and column numbers.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
