//! Error handling for list-table editing
//!
//! This module provides a unified error type and result type for the codec,
//! the invisible-glyph transform and the edit session, plus the non-fatal
//! skipped-line report produced by tolerant parsing.

use std::fmt;

/// List-table error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListTableError {
    /// Strict-mode parse failure
    MalformedMarkup {
        message: String,
        line: Option<usize>,
    },
    /// A value already contains a glyph reserved by the invisible-glyph transform
    EncodingCollision { glyph: char, offset: usize },
    /// Serialize was asked to write zero rows under the reject policy
    EmptyGridWrite,
    /// A grid record does not follow the `col1, col2, ...` exchange format
    InvalidRecord { message: String },
    /// A row or column index outside the grid
    OutOfBounds { row: usize, col: Option<usize> },
    /// The host document has no list-table around the cursor
    BlockNotFound { message: String },
    /// The host refused to apply the replacement text
    ReplacementRejected,
    /// Invalid configuration
    Config { message: String },
    /// IO error (for file operations)
    Io { message: String },
}

impl fmt::Display for ListTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListTableError::MalformedMarkup { message, line } => {
                if let Some(l) = line {
                    write!(f, "Malformed list-table at line {}: {}", l, message)
                } else {
                    write!(f, "Malformed list-table: {}", message)
                }
            }
            ListTableError::EncodingCollision { glyph, offset } => write!(
                f,
                "Value contains reserved glyph '{}' (U+{:04X}) at offset {}",
                glyph, *glyph as u32, offset
            ),
            ListTableError::EmptyGridWrite => {
                write!(f, "Refusing to write a list-table with no rows")
            }
            ListTableError::InvalidRecord { message } => {
                write!(f, "Invalid row record: {}", message)
            }
            ListTableError::OutOfBounds { row, col } => match col {
                Some(c) => write!(f, "Cell ({}, {}) is outside the grid", row, c),
                None => write!(f, "Row {} is outside the grid", row),
            },
            ListTableError::BlockNotFound { message } => {
                write!(f, "List-table not found: {}", message)
            }
            ListTableError::ReplacementRejected => {
                write!(f, "Host rejected the table replacement")
            }
            ListTableError::Config { message } => write!(f, "Configuration error: {}", message),
            ListTableError::Io { message } => write!(f, "IO error: {}", message),
        }
    }
}

impl std::error::Error for ListTableError {}

impl From<std::io::Error> for ListTableError {
    fn from(err: std::io::Error) -> Self {
        ListTableError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for list-table operations
pub type ListTableResult<T> = Result<T, ListTableError>;

// Convenience constructors for errors
impl ListTableError {
    pub fn malformed(message: impl Into<String>) -> Self {
        ListTableError::MalformedMarkup {
            message: message.into(),
            line: None,
        }
    }

    pub fn malformed_at(message: impl Into<String>, line: usize) -> Self {
        ListTableError::MalformedMarkup {
            message: message.into(),
            line: Some(line),
        }
    }

    pub fn invalid_record(message: impl Into<String>) -> Self {
        ListTableError::InvalidRecord {
            message: message.into(),
        }
    }

    pub fn row_out_of_bounds(row: usize) -> Self {
        ListTableError::OutOfBounds { row, col: None }
    }

    pub fn cell_out_of_bounds(row: usize, col: usize) -> Self {
        ListTableError::OutOfBounds {
            row,
            col: Some(col),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ListTableError::BlockNotFound {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        ListTableError::Config {
            message: message.into(),
        }
    }
}

/// Why a line was dropped by the tolerant parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SkipReason {
    /// Cell-start line with no open row
    OrphanCell,
    /// Continuation line with no open cell
    OrphanContinuation,
    /// Line that is not indented enough to belong to the open row
    Unrecognized,
    /// Content after the closing fence
    AfterFence,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::OrphanCell => write!(f, "cell without a row"),
            SkipReason::OrphanContinuation => write!(f, "continuation without a cell"),
            SkipReason::Unrecognized => write!(f, "unrecognized line"),
            SkipReason::AfterFence => write!(f, "content after closing fence"),
        }
    }
}

/// A line the tolerant parser dropped (non-fatal)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkippedLine {
    /// Line number within the parsed span (1-indexed)
    pub line: usize,
    /// The line as written, without its terminator
    pub text: String,
    pub reason: SkipReason,
}

impl SkippedLine {
    /// Turn this report into the error strict mode raises for it
    pub fn into_error(self) -> ListTableError {
        ListTableError::malformed_at(format!("{}: {:?}", self.reason, self.text), self.line)
    }
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Skipped line {} ({}): {}", self.line, self.reason, self.text)
    }
}
