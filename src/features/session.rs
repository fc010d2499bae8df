//! Edit session over one list-table block
//!
//! An [`EditSession`] owns the table between opening a block and writing it
//! back. Cell edits go through a [`CellEditor`] so the box only ever shows
//! revealed text, while the table only ever stores concealed values.
//!
//! ```rust
//! use listab::core::glyphs::{Key, KeyStroke};
//! use listab::core::markup::{ParseOptions, SerializeOptions};
//! use listab::features::session::EditSession;
//!
//! let mut session = EditSession::open("* - a\n  - b", &ParseOptions::default()).unwrap();
//! let editor = session.begin_edit(0, 1).unwrap();
//! editor.apply_input("b·c", 3, &KeyStroke::new(Key::Char('c')));
//! let markup = session.to_markup(&SerializeOptions::compact()).unwrap();
//! assert_eq!(markup, ":::{list-table}\n* - a\n  - b c\n:::");
//! ```

use log::debug;

use crate::core::glyphs::CellEditor;
use crate::core::grid::{Grid, RawRecord, Record, Row, Table};
use crate::core::markup::{parse_list_table, serialize_table, Fencing, ParseOptions, SerializeOptions};
use crate::data::constants::NEW_COLUMN_PREFIX;
use crate::utils::error::{ListTableError, ListTableResult, SkippedLine};

/// The cell whose box is open
#[derive(Debug, Clone)]
struct ActiveEdit {
    row: usize,
    col: usize,
    editor: CellEditor,
}

/// One table being edited
#[derive(Debug, Clone)]
pub struct EditSession {
    table: Table,
    fencing: Fencing,
    skipped: Vec<SkippedLine>,
    active: Option<ActiveEdit>,
    /// Columns inserted so far; numbers the `newN` names
    inserted_columns: usize,
}

impl EditSession {
    /// Parse a block and start editing it
    pub fn open(markup: &str, options: &ParseOptions) -> ListTableResult<Self> {
        let parsed = parse_list_table(markup, options)?;
        debug!(
            "opened list-table session: {} rows, {} skipped lines",
            parsed.grid.len(),
            parsed.skipped.len()
        );
        let fencing = parsed.fencing;
        let skipped = parsed.skipped.clone();
        Ok(Self::with_parts(parsed.into_table(), fencing, skipped))
    }

    /// Start a session on a table built in memory
    pub fn from_table(table: Table) -> Self {
        Self::with_parts(table, Fencing::Unfenced, Vec::new())
    }

    fn with_parts(table: Table, fencing: Fencing, skipped: Vec<SkippedLine>) -> Self {
        EditSession {
            table,
            fencing,
            skipped,
            active: None,
            inserted_columns: 0,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn grid(&self) -> &Grid {
        &self.table.grid
    }

    pub fn fencing(&self) -> Fencing {
        self.fencing
    }

    /// Lines the tolerant parse dropped when the block was opened
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    // ------------------------------------------------------------------------
    // Cell edits
    // ------------------------------------------------------------------------

    /// Open the box on a cell
    ///
    /// Any box already open is committed first, as it would be on blur.
    /// The column may lie past the end of a ragged row, up to the widest
    /// row; such a cell starts empty and is only created on a real change.
    pub fn begin_edit(&mut self, row: usize, col: usize) -> ListTableResult<&mut CellEditor> {
        self.commit_edit()?;

        let target = self
            .table
            .grid
            .row(row)
            .ok_or_else(|| ListTableError::cell_out_of_bounds(row, col))?;
        if col >= self.table.grid.column_count().max(1) {
            return Err(ListTableError::cell_out_of_bounds(row, col));
        }
        let value = target.get(col).unwrap_or_default();
        let editor = CellEditor::begin(value)?;

        debug!("editing cell ({}, {})", row, col);
        let active = self.active.insert(ActiveEdit { row, col, editor });
        Ok(&mut active.editor)
    }

    /// The open box, if any
    pub fn editor_mut(&mut self) -> Option<&mut CellEditor> {
        self.active.as_mut().map(|active| &mut active.editor)
    }

    /// Position of the open box
    pub fn editing(&self) -> Option<(usize, usize)> {
        self.active.as_ref().map(|active| (active.row, active.col))
    }

    /// Close the open box and store its value
    ///
    /// Returns whether a cell changed.
    pub fn commit_edit(&mut self) -> ListTableResult<bool> {
        let Some(ActiveEdit { row, col, editor }) = self.active.take() else {
            return Ok(false);
        };
        if !editor.is_modified() {
            return Ok(false);
        }
        let value = editor.commit();
        debug!("committed cell ({}, {})", row, col);
        self.table.grid.set_cell(row, col, value)?;
        Ok(true)
    }

    /// Close the open box and keep the cell as it was
    pub fn cancel_edit(&mut self) -> bool {
        match self.active.take() {
            Some(active) => {
                debug!("discarded edit of cell ({}, {})", active.row, active.col);
                true
            }
            None => false,
        }
    }

    /// Set a cell directly (paste into grid, programmatic edits)
    pub fn set_cell(&mut self, row: usize, col: usize, value: impl Into<String>) -> ListTableResult<()> {
        self.commit_edit()?;
        self.table.grid.set_cell(row, col, value)
    }

    // ------------------------------------------------------------------------
    // Row operations
    // ------------------------------------------------------------------------

    /// Insert an empty row as wide as the widest row
    pub fn insert_row(&mut self, at: usize) -> ListTableResult<()> {
        self.commit_edit()?;
        let width = self.table.grid.column_count().max(1);
        self.table
            .grid
            .insert_row(at, Row::from_cells(std::iter::repeat("").take(width)))?;
        debug!("inserted row at {}", at);
        Ok(())
    }

    pub fn delete_row(&mut self, at: usize) -> ListTableResult<Row> {
        self.commit_edit()?;
        let row = self.table.grid.remove_row(at)?;
        debug!("deleted row {}", at);
        Ok(row)
    }

    pub fn move_row(&mut self, from: usize, to: usize) -> ListTableResult<()> {
        self.commit_edit()?;
        self.table.grid.move_row(from, to)?;
        debug!("moved row {} to {}", from, to);
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Column operations
    // ------------------------------------------------------------------------

    /// Insert an empty column and return its display name (`new1`, `new2`, ...)
    pub fn insert_column(&mut self, at: usize) -> ListTableResult<String> {
        self.commit_edit()?;
        let count = self.table.grid.column_count();
        if at > count {
            return Err(ListTableError::cell_out_of_bounds(0, at));
        }
        self.table.grid.insert_column(at);

        self.inserted_columns += 1;
        let name = format!("{}{}", NEW_COLUMN_PREFIX, self.inserted_columns);
        debug!("inserted column {} at {}", name, at);
        Ok(name)
    }

    pub fn delete_column(&mut self, at: usize) -> ListTableResult<()> {
        self.commit_edit()?;
        if at >= self.table.grid.column_count() {
            return Err(ListTableError::cell_out_of_bounds(0, at));
        }
        self.table.grid.remove_column(at);
        debug!("deleted column {}", at);
        Ok(())
    }

    pub fn move_column(&mut self, from: usize, to: usize) -> ListTableResult<()> {
        self.commit_edit()?;
        let count = self.table.grid.column_count();
        if from >= count || to >= count {
            return Err(ListTableError::cell_out_of_bounds(0, from.max(to)));
        }
        self.table.grid.move_column(from, to);
        debug!("moved column {} to {}", from, to);
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Exchange and output
    // ------------------------------------------------------------------------

    /// Rows in the `col1, col2, ...` exchange format
    pub fn records(&self) -> Vec<Record> {
        self.table.grid.to_records()
    }

    /// Replace every row from exchange records; the directive is kept
    pub fn replace_from_records(&mut self, records: &[RawRecord]) -> ListTableResult<()> {
        let grid = Grid::from_records(records)?;
        self.active = None;
        debug!("replaced grid from {} records", grid.len());
        self.table.grid = grid;
        Ok(())
    }

    /// Commit the open box, then serialize the table
    pub fn to_markup(&mut self, options: &SerializeOptions) -> ListTableResult<String> {
        self.commit_edit()?;
        serialize_table(&self.table, options)
    }

    /// Commit the open box and end the session
    pub fn into_table(mut self) -> ListTableResult<Table> {
        self.commit_edit()?;
        Ok(self.table)
    }
}
