//! Core list-table modules
//!
//! This module contains the editing engine:
//! - `grid`: the table model and its exchange format
//! - `markup`: list-table markup to grid and back
//! - `glyphs`: the invisible-glyph transform used by the cell editor

pub mod glyphs;
pub mod grid;
pub mod markup;

// Re-export main types and functions
pub use glyphs::{conceal, remap_caret, reveal, CellEditor, Key, KeyStroke, Modifiers};
pub use grid::{normalize_value, Directive, Grid, RawRecord, Record, Row, Table};
pub use markup::{
    parse_list_table, serialize_grid, serialize_table, EmptyGridPolicy, Fencing, LineEnding,
    ListTableOptions, ParseOptions, ParsedTable, SerializeOptions,
};
