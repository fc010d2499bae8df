//! State-aware list-table parser

use log::{debug, warn};

use super::line::{classify, LineKind};
use super::options::ParseOptions;
use crate::core::grid::{Directive, Grid, Row, Table};
use crate::data::constants::DASH_WIDTH;
use crate::data::directive::{is_known_option, suggest_option};
use crate::utils::error::{ListTableError, ListTableResult, SkipReason, SkippedLine};

/// Which fence lines the parsed span contained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Fencing {
    /// Both `:::{list-table}` and `:::`
    Fenced,
    /// Neither fence line
    Unfenced,
    /// Opening fence without a closing one
    MissingClose,
    /// Closing fence without an opening one
    MissingOpen,
}

impl Fencing {
    fn from_flags(open: bool, close: bool) -> Self {
        match (open, close) {
            (true, true) => Fencing::Fenced,
            (false, false) => Fencing::Unfenced,
            (true, false) => Fencing::MissingClose,
            (false, true) => Fencing::MissingOpen,
        }
    }

    pub fn is_fenced(&self) -> bool {
        matches!(self, Fencing::Fenced)
    }
}

/// Result of parsing one list-table span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable {
    pub grid: Grid,
    pub directive: Directive,
    pub fencing: Fencing,
    /// Lines dropped by tolerant parsing, in document order
    pub skipped: Vec<SkippedLine>,
}

impl ParsedTable {
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }

    pub fn into_table(self) -> Table {
        Table {
            directive: self.directive,
            grid: self.grid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Nothing but blank lines seen so far
    Start,
    /// After the opening fence; option lines are accepted
    Header,
    /// Inside the rows
    Body,
    /// After the closing fence
    Closed,
}

/// The row currently receiving cells
#[derive(Debug)]
struct OpenRow {
    row: Row,
    row_indent: usize,
    /// Column of the row marker's dash; stands in for `cell_indent` until locked
    row_dash: usize,
    /// Indentation of this row's cell-start lines, locked by the first one
    cell_indent: Option<usize>,
    /// Column where the open cell's text starts
    content_col: usize,
}

impl OpenRow {
    fn new(indent: usize, dash: usize, content: &str) -> Self {
        OpenRow {
            row: Row::from_cells([content]),
            row_indent: indent,
            row_dash: dash,
            cell_indent: None,
            content_col: dash + DASH_WIDTH,
        }
    }

    /// Lines deeper than this continue the open cell
    fn continuation_threshold(&self) -> usize {
        self.cell_indent.unwrap_or(self.row_dash)
    }

    /// Whether a dash line at `indent` starts the next cell of this row
    fn is_cell_start(&self, indent: usize) -> bool {
        match self.cell_indent {
            Some(locked) => indent == locked,
            // Shallower than column 1's text: a sibling cell, not a nested list
            None => indent > self.row_indent && indent < self.content_col,
        }
    }

    fn start_cell(&mut self, indent: usize, content: &str) {
        self.cell_indent.get_or_insert(indent);
        self.content_col = indent + DASH_WIDTH;
        self.row.push(content);
    }

    fn continue_cell(&mut self, line: &str, indent: usize) {
        let start = indent.min(self.content_col);
        if let Some(cell) = self.row.cells.last_mut() {
            cell.push('\n');
            cell.push_str(&line[start..]);
        }
    }
}

/// State-aware list-table parser
///
/// Lines are fed top to bottom. Each row locks its cell-start indentation
/// from its first cell-start line, which lets 2-space and 4-space authored
/// tables parse alike.
pub struct ListTableParser {
    options: ParseOptions,
    phase: Phase,
    rows: Vec<Row>,
    open: Option<OpenRow>,
    directive: Directive,
    saw_open_fence: bool,
    saw_close_fence: bool,
    skipped: Vec<SkippedLine>,
}

impl ListTableParser {
    /// Create a new parser with the given options
    pub fn new(options: ParseOptions) -> Self {
        ListTableParser {
            options,
            phase: Phase::Start,
            rows: Vec::new(),
            open: None,
            directive: Directive::default(),
            saw_open_fence: false,
            saw_close_fence: false,
            skipped: Vec::new(),
        }
    }

    /// Process one line (1-indexed `number`, terminator already removed)
    pub fn process_line(&mut self, number: usize, line: &str) -> ListTableResult<()> {
        let line = line.trim_end();
        let kind = classify(line);

        if kind == LineKind::Blank {
            return Ok(());
        }

        match self.phase {
            Phase::Closed => self.skip(number, line, SkipReason::AfterFence),
            Phase::Start => match kind {
                LineKind::OpenFence { title } => {
                    self.saw_open_fence = true;
                    self.directive.title = title.map(str::to_string);
                    self.phase = Phase::Header;
                    Ok(())
                }
                _ => {
                    self.phase = Phase::Body;
                    self.body_line(number, line, kind)
                }
            },
            Phase::Header => match kind {
                LineKind::DirectiveOption { name, value } => {
                    if !is_known_option(name) {
                        match suggest_option(name) {
                            Some((known, hint)) => warn!(
                                "unknown list-table option '{}' kept as written (did you mean '{}': {}?)",
                                name, known, hint
                            ),
                            None => warn!("unknown list-table option '{}' kept as written", name),
                        }
                    }
                    self.directive
                        .options
                        .insert(name.to_string(), value.to_string());
                    Ok(())
                }
                _ => {
                    self.phase = Phase::Body;
                    self.body_line(number, line, kind)
                }
            },
            Phase::Body => self.body_line(number, line, kind),
        }
    }

    fn body_line(&mut self, number: usize, line: &str, kind: LineKind<'_>) -> ListTableResult<()> {
        match kind {
            LineKind::CloseFence => {
                self.saw_close_fence = true;
                self.close_row();
                self.phase = Phase::Closed;
                return Ok(());
            }
            LineKind::RowStart {
                indent,
                dash,
                content,
            } if self.open.as_ref().map_or(true, |open| indent <= open.row_indent) => {
                self.close_row();
                self.open = Some(OpenRow::new(indent, dash, content));
                return Ok(());
            }
            _ => {}
        }

        let indent = kind.indent();
        let Some(open) = self.open.as_mut() else {
            let reason = match kind {
                LineKind::Dash { .. } => SkipReason::OrphanCell,
                _ if indent > 0 => SkipReason::OrphanContinuation,
                _ => SkipReason::Unrecognized,
            };
            return self.skip(number, line, reason);
        };

        if let LineKind::Dash { indent, content } = kind {
            if open.is_cell_start(indent) {
                open.start_cell(indent, content);
                return Ok(());
            }
        }
        if indent > open.continuation_threshold() {
            open.continue_cell(line, indent);
            return Ok(());
        }
        self.skip(number, line, SkipReason::Unrecognized)
    }

    fn close_row(&mut self) {
        if let Some(open) = self.open.take() {
            self.rows.push(open.row);
        }
    }

    fn skip(&mut self, number: usize, line: &str, reason: SkipReason) -> ListTableResult<()> {
        let skipped = SkippedLine {
            line: number,
            text: line.to_string(),
            reason,
        };
        if self.options.strict {
            return Err(skipped.into_error());
        }
        warn!("{}", skipped);
        self.skipped.push(skipped);
        Ok(())
    }

    /// Finish parsing and return the table
    pub fn finish(mut self) -> ListTableResult<ParsedTable> {
        self.close_row();
        let fencing = Fencing::from_flags(self.saw_open_fence, self.saw_close_fence);
        if self.options.require_fence && !fencing.is_fenced() {
            return Err(ListTableError::malformed(match fencing {
                Fencing::MissingClose => "closing ':::' fence not found",
                Fencing::MissingOpen => "opening ':::{list-table}' fence not found",
                _ => "list-table fences not found",
            }));
        }

        debug!(
            "parsed list-table: {} rows, {} skipped lines, {:?}",
            self.rows.len(),
            self.skipped.len(),
            fencing
        );

        Ok(ParsedTable {
            grid: Grid::from_rows(self.rows),
            directive: self.directive,
            fencing,
            skipped: self.skipped,
        })
    }
}

/// Parse a list-table span with the given options
pub fn parse_list_table(input: &str, options: &ParseOptions) -> ListTableResult<ParsedTable> {
    let mut parser = ListTableParser::new(options.clone());
    for (i, line) in input.split('\n').enumerate() {
        parser.process_line(i + 1, line)?;
    }
    parser.finish()
}
