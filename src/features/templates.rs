//! Empty-table templates for the "insert list-table" command
//!
//! ## Example
//!
//! ```rust
//! use listab::features::templates::insert_template;
//!
//! assert!(insert_template().starts_with(":::{list-table}"));
//! ```

use crate::core::grid::{Grid, Row, Table};
use crate::core::markup::{ListTableGenerator, SerializeOptions};

/// Rows and columns of the table inserted by default
pub const TEMPLATE_ROWS: usize = 2;
pub const TEMPLATE_COLUMNS: usize = 2;

/// A `rows` x `cols` grid of empty cells
///
/// Zero columns still gives each row one cell, as a row in markup always
/// has at least its row-start cell.
pub fn empty_grid(rows: usize, cols: usize) -> Grid {
    let cols = cols.max(1);
    (0..rows)
        .map(|_| Row::from_cells(std::iter::repeat("").take(cols)))
        .collect()
}

/// Markup for an empty table of the given size
///
/// Zero rows gives an empty block whatever the empty-grid policy says.
pub fn table_template(rows: usize, cols: usize, options: &SerializeOptions) -> String {
    let table = Table::new(empty_grid(rows, cols));
    ListTableGenerator::new(options).generate(&table.directive, &table.grid)
}

/// The 2x2 empty table inserted at the cursor
pub fn insert_template() -> String {
    table_template(TEMPLATE_ROWS, TEMPLATE_COLUMNS, &SerializeOptions::default())
}
