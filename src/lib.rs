//! # listab
//!
//! Grid editing for MyST `{list-table}` blocks.
//!
//! ## Features
//!
//! - **Bidirectional**: list-table markup to a ragged cell grid and back
//! - **Tolerant**: unrecognized lines are reported, not silently dropped
//! - **Cell editing**: visible-whitespace transform with caret remapping
//! - **Edit sessions**: row and column operations, record exchange
//! - **WASM Support**: Compiles to WebAssembly for webview usage
//!
//! ## Usage Examples
//!
//! ### Parse and serialize
//!
//! ```rust
//! use listab::{parse, serialize};
//!
//! let parsed = parse("* - Line1\n    Line2\n  - Cell2").unwrap();
//! assert_eq!(parsed.grid.cell(0, 0), Some("Line1\nLine2"));
//!
//! let markup = serialize(&parsed.grid);
//! assert!(markup.starts_with(":::{list-table}"));
//! assert_eq!(parse(&markup).unwrap().grid, parsed.grid);
//! ```
//!
//! ### Visible whitespace
//!
//! ```rust
//! use listab::{conceal, reveal};
//!
//! let shown = reveal("two words").unwrap();
//! assert_eq!(shown, "two·words");
//! assert_eq!(conceal(&shown), "two words");
//! ```

/// Core modules - grid model, markup codec, glyph transform
pub mod core;

/// Data layer - grammar markers and directive options
pub mod data;

/// Feature modules - edit sessions and host glue
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core types and functions
pub use core::glyphs::{
    conceal, copy_selection, fix_caret, remap_caret, reveal, CellEditor, Key, KeyAction,
    KeyStroke, Modifiers, Remapped,
};
pub use core::grid::{normalize_value, Directive, Grid, RawRecord, Record, Row, Table};
pub use core::markup::{
    parse_list_table, serialize_grid, serialize_table, EmptyGridPolicy, Fencing, LineEnding,
    ListTableGenerator, ListTableOptions, ListTableParser, ParseOptions, ParsedTable,
    SerializeOptions,
};

// Re-export feature modules
pub use features::locate;
pub use features::session::{self, EditSession};
pub use features::templates;

// Re-export utilities
pub use utils::error::{ListTableError, ListTableResult, SkipReason, SkippedLine};

/// Parse list-table markup with default (tolerant) options
///
/// Tolerant parsing reports problem lines in `skipped` instead of failing;
/// only strict or fence-requiring options produce an `Err`.
pub fn parse(input: &str) -> ListTableResult<ParsedTable> {
    parse_list_table(input, &ParseOptions::default())
}

/// Parse list-table markup with custom options
pub fn parse_with_options(input: &str, options: &ParseOptions) -> ListTableResult<ParsedTable> {
    parse_list_table(input, options)
}

/// Serialize a grid with default options
///
/// Never fails: an empty grid becomes an empty block.
pub fn serialize(grid: &Grid) -> String {
    ListTableGenerator::new(&SerializeOptions::default()).generate(&Directive::default(), grid)
}

/// Serialize a table (directive included) with custom options
pub fn serialize_with_options(table: &Table, options: &SerializeOptions) -> ListTableResult<String> {
    serialize_table(table, options)
}
