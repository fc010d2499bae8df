//! Data layer - Static markers and tables
//!
//! This module contains the static data of the list-table grammar:
//! - Fence, row and cell markers
//! - The reserved display glyphs
//! - Known directive options

pub mod constants;
pub mod directive;

// Re-export commonly used items
pub use constants::{
    CELL_MARKER, CLOSE_FENCE, NEWLINE_GLYPH, OPEN_FENCE, RESERVED_GLYPHS, ROW_MARKER, SPACE_GLYPH,
};
pub use directive::{is_known_option, LIST_TABLE_OPTIONS};
