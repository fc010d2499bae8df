//! List-table Markup Codec
//!
//! A bidirectional codec between MyST `{list-table}` markup and a [`Grid`].
//!
//! ```text
//! :::{list-table} Title        <- opening fence (+ optional title)
//! :header-rows: 1              <- directive options
//!
//! * - Row 1, column 1          <- row-start
//!     second line of the cell  <- continuation
//!   - Row 1, column 2          <- cell-start
//!
//! * - Row 2, column 1
//! :::                          <- closing fence
//! ```
//!
//! # Architecture
//!
//! ```text
//! Markup -> Line Classification -> Row State Machine -> Grid
//! Grid   -> Line Assembly -> Markup
//! ```
//!
//! `parse(serialize(g))` reproduces every grid in normal form (see
//! [`Grid::normalized`]). The other direction only preserves structure:
//! blank lines and indentation style are rewritten.
//!
//! # Example
//!
//! ```rust
//! use listab::core::markup::{parse_list_table, serialize_grid, ParseOptions, SerializeOptions};
//!
//! let parsed = parse_list_table("* - A\n  - B", &ParseOptions::default()).unwrap();
//! assert_eq!(parsed.grid.cell(0, 1), Some("B"));
//!
//! let markup = serialize_grid(&parsed.grid, &SerializeOptions::compact()).unwrap();
//! assert_eq!(markup, ":::{list-table}\n* - A\n  - B\n:::");
//! ```
//!
//! [`Grid`]: crate::core::grid::Grid
//! [`Grid::normalized`]: crate::core::grid::Grid::normalized

mod generator;
mod line;
mod options;
mod parser;

#[cfg(test)]
mod tests;

// Re-export public API
pub use generator::{serialize_grid, serialize_table, ListTableGenerator};
pub use options::{EmptyGridPolicy, LineEnding, ListTableOptions, ParseOptions, SerializeOptions};
pub use parser::{parse_list_table, Fencing, ListTableParser, ParsedTable};
