//! Utility modules
//!
//! Error types, result types and the skipped-line report.

pub mod error;

// Re-export commonly used items
pub use error::{ListTableError, ListTableResult, SkipReason, SkippedLine};
