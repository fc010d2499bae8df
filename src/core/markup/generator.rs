//! List-table markup generator

use log::debug;

use super::options::{EmptyGridPolicy, SerializeOptions};
use crate::core::grid::{Directive, Grid, Row, Table};
use crate::data::constants::{CELL_MARKER, CLOSE_FENCE, CONTINUATION_INDENT, OPEN_FENCE, ROW_MARKER};
use crate::utils::error::{ListTableError, ListTableResult};

/// Writes a table back as list-table markup
///
/// Output depends only on the table, never on the markup it was parsed
/// from. Lines are collected one by one and joined with the configured line
/// ending at the end.
pub struct ListTableGenerator<'a> {
    options: &'a SerializeOptions,
    lines: Vec<String>,
}

impl<'a> ListTableGenerator<'a> {
    /// Create a new generator with the given options
    pub fn new(options: &'a SerializeOptions) -> Self {
        ListTableGenerator {
            options,
            lines: Vec::new(),
        }
    }

    fn push_header(&mut self, directive: &Directive) {
        match &directive.title {
            Some(title) => self.lines.push(format!("{} {}", OPEN_FENCE, title)),
            None => self.lines.push(OPEN_FENCE.to_string()),
        }
        for (name, value) in &directive.options {
            if value.is_empty() {
                self.lines.push(format!(":{}:", name));
            } else {
                self.lines.push(format!(":{}: {}", name, value));
            }
        }
        if self.options.blank_line_between_rows {
            self.lines.push(String::new());
        }
    }

    /// Emit one row; a row without cells is written as an empty first cell
    fn push_row(&mut self, row: &Row) {
        let mut cells = row.cells.iter();
        let first = cells.next().map(String::as_str).unwrap_or_default();
        self.push_cell(ROW_MARKER, first);
        for cell in cells {
            self.push_cell(CELL_MARKER, cell);
        }
        if self.options.blank_line_between_rows {
            self.lines.push(String::new());
        }
    }

    /// Emit a marker line, then every further value line at the continuation indent
    ///
    /// A `\r` left over from CRLF text in a value is dropped so the configured
    /// line ending is the only one in the output.
    fn push_cell(&mut self, marker: &str, value: &str) {
        for (i, line) in value.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let prefix = if i == 0 { marker } else { CONTINUATION_INDENT };
            self.lines.push(format!("{}{}", prefix, line));
        }
    }

    /// Generate markup for a directive and its grid
    pub fn generate(mut self, directive: &Directive, grid: &Grid) -> String {
        self.push_header(directive);
        for row in &grid.rows {
            self.push_row(row);
        }
        self.lines.push(CLOSE_FENCE.to_string());

        debug!(
            "serialized list-table: {} rows, {} lines",
            grid.len(),
            self.lines.len()
        );
        self.lines.join(self.options.line_ending.as_str())
    }
}

/// Serialize a table with the given options
pub fn serialize_table(table: &Table, options: &SerializeOptions) -> ListTableResult<String> {
    check_policy(&table.grid, options)?;
    Ok(ListTableGenerator::new(options).generate(&table.directive, &table.grid))
}

/// Serialize a bare grid (no title, no options) with the given options
pub fn serialize_grid(grid: &Grid, options: &SerializeOptions) -> ListTableResult<String> {
    check_policy(grid, options)?;
    Ok(ListTableGenerator::new(options).generate(&Directive::default(), grid))
}

fn check_policy(grid: &Grid, options: &SerializeOptions) -> ListTableResult<()> {
    if grid.is_empty() && options.empty_grid == EmptyGridPolicy::Reject {
        return Err(ListTableError::EmptyGridWrite);
    }
    Ok(())
}
