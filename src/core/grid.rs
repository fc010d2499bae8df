//! Ragged cell grid
//!
//! A [`Grid`] is what a list-table block parses into: an ordered list of
//! rows, each an ordered list of cell strings. Rows may have different
//! lengths; a missing cell is absent, never an empty string. Columns are
//! identified by position only.

use indexmap::IndexMap;

use crate::data::constants::{column_key, COLUMN_KEY_PREFIX};
use crate::utils::error::{ListTableError, ListTableResult};

/// A row as handed to the grid UI: `col1, col2, ...` to cell value
pub type Record = IndexMap<String, String>;

/// A row as handed back by the grid UI; `None` values are null cells
pub type RawRecord = IndexMap<String, Option<String>>;

/// One table row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    /// Cell values in column order
    pub cells: Vec<String>,
}

impl Row {
    /// Create a new empty row
    pub fn new() -> Self {
        Row { cells: Vec::new() }
    }

    /// Create a row from cell values
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Row {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a cell value (0-based column)
    pub fn get(&self, col: usize) -> Option<&str> {
        self.cells.get(col).map(String::as_str)
    }

    pub fn push(&mut self, value: impl Into<String>) {
        self.cells.push(value.into());
    }

    /// Set a cell value, materializing empty cells before it if the row is
    /// shorter than `col`
    pub fn set(&mut self, col: usize, value: impl Into<String>) {
        if col >= self.cells.len() {
            self.cells.resize(col + 1, String::new());
        }
        self.cells[col] = value.into();
    }

    /// Export in the grid UI exchange format
    pub fn to_record(&self) -> Record {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, v)| (column_key(i), v.clone()))
            .collect()
    }

    /// Import from the grid UI exchange format
    ///
    /// Keys must be `col1, col2, ...` without gaps (in any order). Null
    /// values become empty cells.
    pub fn from_record(record: &RawRecord) -> ListTableResult<Self> {
        let mut indexed = Vec::with_capacity(record.len());
        for (key, value) in record {
            let index = parse_column_key(key).ok_or_else(|| {
                ListTableError::invalid_record(format!("'{}' is not a positional column key", key))
            })?;
            indexed.push((index, value.clone().unwrap_or_default()));
        }
        indexed.sort_by_key(|(i, _)| *i);

        if let Some(pos) = indexed.iter().enumerate().position(|(pos, (i, _))| pos != *i) {
            return Err(ListTableError::invalid_record(format!(
                "missing {} before {}",
                column_key(pos),
                column_key(indexed[pos].0)
            )));
        }

        Ok(Row {
            cells: indexed.into_iter().map(|(_, v)| v).collect(),
        })
    }
}

/// Parse `colN` (N >= 1, no leading zeros) into a 0-based column index
pub fn parse_column_key(key: &str) -> Option<usize> {
    let digits = key.strip_prefix(COLUMN_KEY_PREFIX)?;
    if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: usize = digits.parse().ok()?;
    n.checked_sub(1)
}

/// Ordered, ragged rows of cell values
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    pub rows: Vec<Row>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Grid { rows: Vec::new() }
    }

    pub fn from_rows(rows: Vec<Row>) -> Self {
        Grid { rows }
    }

    /// Build a grid from nested cell values
    pub fn from_cells<R, C, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        rows.into_iter().map(Row::from_cells).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }

    /// Get a cell value (0-based row and column)
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Set a cell value on an existing row
    pub fn set_cell(&mut self, row: usize, col: usize, value: impl Into<String>) -> ListTableResult<()> {
        let target = self
            .rows
            .get_mut(row)
            .ok_or_else(|| ListTableError::cell_out_of_bounds(row, col))?;
        target.set(col, value);
        Ok(())
    }

    /// Cell count of the longest row
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Row::len).max().unwrap_or(0)
    }

    /// Insert a row before `at` (`at == len` appends)
    pub fn insert_row(&mut self, at: usize, row: Row) -> ListTableResult<()> {
        if at > self.rows.len() {
            return Err(ListTableError::row_out_of_bounds(at));
        }
        self.rows.insert(at, row);
        Ok(())
    }

    pub fn remove_row(&mut self, at: usize) -> ListTableResult<Row> {
        if at >= self.rows.len() {
            return Err(ListTableError::row_out_of_bounds(at));
        }
        Ok(self.rows.remove(at))
    }

    /// Move a row so that it ends up at index `to`
    pub fn move_row(&mut self, from: usize, to: usize) -> ListTableResult<()> {
        if from >= self.rows.len() {
            return Err(ListTableError::row_out_of_bounds(from));
        }
        if to >= self.rows.len() {
            return Err(ListTableError::row_out_of_bounds(to));
        }
        let row = self.rows.remove(from);
        self.rows.insert(to, row);
        Ok(())
    }

    /// Insert an empty cell at column `at` in every row that reaches it
    ///
    /// Rows shorter than `at` are left alone so ragged rows stay ragged.
    pub fn insert_column(&mut self, at: usize) {
        for row in &mut self.rows {
            if at <= row.cells.len() {
                row.cells.insert(at, String::new());
            }
        }
    }

    /// Remove column `at` from every row that has it
    pub fn remove_column(&mut self, at: usize) {
        for row in &mut self.rows {
            if at < row.cells.len() {
                row.cells.remove(at);
            }
        }
    }

    /// Move column `from` to index `to` in every row that has it
    pub fn move_column(&mut self, from: usize, to: usize) {
        for row in &mut self.rows {
            if from < row.cells.len() {
                let value = row.cells.remove(from);
                let to = to.min(row.cells.len());
                row.cells.insert(to, value);
            }
        }
    }

    /// Export every row in the grid UI exchange format
    pub fn to_records(&self) -> Vec<Record> {
        self.rows.iter().map(Row::to_record).collect()
    }

    /// Import rows from the grid UI exchange format
    pub fn from_records(records: &[RawRecord]) -> ListTableResult<Self> {
        let rows = records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                Row::from_record(record).map_err(|err| match err {
                    ListTableError::InvalidRecord { message } => {
                        ListTableError::invalid_record(format!("row {}: {}", i + 1, message))
                    }
                    other => other,
                })
            })
            .collect::<ListTableResult<Vec<_>>>()?;
        Ok(Grid { rows })
    }

    /// Map the grid to the form a parse of its serialization yields
    ///
    /// Rows without cells get one empty cell, and every value goes through
    /// [`normalize_value`].
    pub fn normalized(&self) -> Grid {
        self.rows
            .iter()
            .map(|row| {
                if row.is_empty() {
                    Row::from_cells([""])
                } else {
                    Row::from_cells(row.cells.iter().map(|v| normalize_value(v)))
                }
            })
            .collect()
    }

    /// Whether [`Grid::normalized`] would leave this grid unchanged
    pub fn is_normalized(&self) -> bool {
        self.rows
            .iter()
            .all(|row| !row.is_empty() && row.cells.iter().all(|v| normalize_value(v) == *v))
    }
}

impl FromIterator<Row> for Grid {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Grid {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Normal form of a cell value
///
/// The first line is trimmed on both sides; later lines lose trailing
/// whitespace and are dropped when blank. Leading whitespace on later lines
/// is content (nested lists) and is kept.
pub fn normalize_value(value: &str) -> String {
    let mut lines = value.split('\n');
    let mut out = lines.next().unwrap_or_default().trim().to_string();
    for line in lines {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        out.push('\n');
        out.push_str(line);
    }
    out
}

/// Fence title and options of a list-table block
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Directive {
    /// Text after `:::{list-table}` on the opening fence line
    pub title: Option<String>,
    /// `:name: value` option lines, in document order
    pub options: IndexMap<String, String>,
}

impl Directive {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.options.is_empty()
    }
}

/// A directive together with its grid
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    pub directive: Directive,
    pub grid: Grid,
}

impl Table {
    pub fn new(grid: Grid) -> Self {
        Table {
            directive: Directive::default(),
            grid,
        }
    }
}
