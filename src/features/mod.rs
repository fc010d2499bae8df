//! Feature modules - Editing on top of the codec
//!
//! This module contains the pieces a host editor drives:
//! - Edit sessions (cell edits, row and column operations)
//! - Locating a block in a document and writing it back
//! - The "insert list-table" template

pub mod locate;
pub mod session;
pub mod templates;

// Re-export commonly used types
pub use locate::{open_block, write_block, BlockLocator, FenceLocator, OpenBlock, ReplacementSink};
pub use session::EditSession;
pub use templates::{empty_grid, insert_template};
