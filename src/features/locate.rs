//! Finding a list-table in a host document and writing it back
//!
//! The editor never touches the host document directly. Two traits stand in
//! for the host:
//!
//! - `BlockLocator`: finds the block around the cursor
//! - `ReplacementSink`: replaces a range of the document with new text
//!
//! `FenceLocator` and the `String` sink cover plain text documents (CLI,
//! tests); a text editor host implements them over its own buffer.

use std::ops::Range;

use log::debug;

use super::session::EditSession;
use crate::core::markup::{ParseOptions, SerializeOptions};
use crate::data::constants::{CLOSE_FENCE, OPEN_FENCE};
use crate::utils::error::{ListTableError, ListTableResult};

/// Trait for locating the list-table block around a cursor
pub trait BlockLocator {
    /// Byte range of the block containing `cursor`, fence lines included
    fn locate_block(&self, doc: &str, cursor: usize) -> Option<Range<usize>>;
}

/// Trait for writing replacement text back into the host document
pub trait ReplacementSink {
    /// Replace `range` with `text`; `false` when the host refuses
    fn apply_replacement(&mut self, range: Range<usize>, text: &str) -> bool;
}

/// Locates blocks by their column-0 fence lines
///
/// The block is the closest `:::{list-table}` line at or before the cursor
/// together with the first `:::` line after it, provided the cursor does not
/// lie past that closing line. The range ends before the closing line's
/// terminator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FenceLocator;

/// A document line: byte start and end, terminator excluded
fn lines_with_offsets(doc: &str) -> Vec<(usize, &str)> {
    let mut lines = Vec::new();
    let mut start = 0;
    for line in doc.split('\n') {
        let text = line.strip_suffix('\r').unwrap_or(line);
        lines.push((start, text));
        start += line.len() + 1;
    }
    lines
}

fn is_open_fence(line: &str) -> bool {
    line.starts_with(OPEN_FENCE)
}

fn is_close_fence(line: &str) -> bool {
    line.starts_with(CLOSE_FENCE) && !is_open_fence(line)
}

impl BlockLocator for FenceLocator {
    fn locate_block(&self, doc: &str, cursor: usize) -> Option<Range<usize>> {
        if cursor > doc.len() {
            return None;
        }
        let lines = lines_with_offsets(doc);
        // Offsets are ascending, so the cursor's line is the last one starting at or before it
        let cursor_line = lines.partition_point(|(start, _)| *start <= cursor).checked_sub(1)?;

        let open = (0..=cursor_line).rev().find(|&i| is_open_fence(lines[i].1))?;
        let close = (open + 1..lines.len()).find(|&i| is_close_fence(lines[i].1))?;
        if close < cursor_line {
            return None;
        }

        let (start, _) = lines[open];
        let (close_start, close_text) = lines[close];
        Some(start..close_start + close_text.len())
    }
}

impl ReplacementSink for String {
    fn apply_replacement(&mut self, range: Range<usize>, text: &str) -> bool {
        if range.start > range.end
            || range.end > self.len()
            || !self.is_char_boundary(range.start)
            || !self.is_char_boundary(range.end)
        {
            return false;
        }
        self.replace_range(range, text);
        true
    }
}

/// A block opened for editing, with the range it came from
#[derive(Debug, Clone)]
pub struct OpenBlock {
    pub range: Range<usize>,
    pub session: EditSession,
}

/// Locate the block around `cursor` and open an edit session on it
pub fn open_block<L: BlockLocator + ?Sized>(
    locator: &L,
    doc: &str,
    cursor: usize,
    options: &ParseOptions,
) -> ListTableResult<OpenBlock> {
    let range = locator.locate_block(doc, cursor).ok_or_else(|| {
        ListTableError::not_found(format!("no list-table around offset {}", cursor))
    })?;
    let markup = doc
        .get(range.clone())
        .ok_or_else(|| ListTableError::not_found(format!("invalid block range {:?}", range)))?;

    debug!("opening list-table block at {:?}", range);
    let session = EditSession::open(markup, options)?;
    Ok(OpenBlock { range, session })
}

/// Serialize an open block and hand it to the host in place of its range
///
/// Returns the markup that was written.
pub fn write_block<S: ReplacementSink + ?Sized>(
    sink: &mut S,
    block: OpenBlock,
    options: &SerializeOptions,
) -> ListTableResult<String> {
    let OpenBlock { range, mut session } = block;
    let markup = session.to_markup(options)?;
    if !sink.apply_replacement(range.clone(), &markup) {
        return Err(ListTableError::ReplacementRejected);
    }
    debug!("wrote list-table block over {:?}", range);
    Ok(markup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOC: &str = "# Title\n\n:::{list-table}\n* - a\n  - b\n:::\n\nafter\n";

    #[test]
    fn test_locate_block_around_cursor() {
        let start = DOC.find(":::{").unwrap();
        let end = DOC.rfind(":::").unwrap() + 3;
        let inside = DOC.find("- b").unwrap();

        assert_eq!(FenceLocator.locate_block(DOC, inside), Some(start..end));
        assert_eq!(FenceLocator.locate_block(DOC, start), Some(start..end));
        assert_eq!(FenceLocator.locate_block(DOC, end), Some(start..end));
    }

    #[test]
    fn test_locate_block_outside() {
        assert_eq!(FenceLocator.locate_block(DOC, 0), None);
        assert_eq!(FenceLocator.locate_block(DOC, DOC.find("after").unwrap()), None);
        assert_eq!(FenceLocator.locate_block(DOC, DOC.len() + 1), None);
    }

    #[test]
    fn test_locate_block_without_close_fence() {
        assert_eq!(FenceLocator.locate_block(":::{list-table}\n* - a\n", 18), None);
    }

    #[test]
    fn test_locate_block_crlf_excludes_terminator() {
        let doc = ":::{list-table}\r\n* - a\r\n:::\r\nrest";
        let range = FenceLocator.locate_block(doc, 18).unwrap();
        assert_eq!(&doc[range], ":::{list-table}\r\n* - a\r\n:::");
    }

    #[test]
    fn test_string_sink_checks_range() {
        let mut doc = String::from("héllo");
        assert!(!doc.apply_replacement(0..2, "x"));
        assert!(!doc.apply_replacement(0..99, "x"));
        assert!(doc.apply_replacement(0..3, "j"));
        assert_eq!(doc, "jllo");
    }

    #[test]
    fn test_open_and_write_block() {
        let mut doc = DOC.to_string();
        let cursor = doc.find("- a").unwrap();
        let mut block = open_block(&FenceLocator, &doc, cursor, &ParseOptions::default()).unwrap();
        block.session.set_cell(1, 0, "c").unwrap_err();
        block.session.insert_row(1).unwrap();
        block.session.set_cell(1, 0, "c").unwrap();

        let written = write_block(&mut doc, block, &SerializeOptions::compact()).unwrap();
        assert_eq!(written, ":::{list-table}\n* - a\n  - b\n* - c\n  - \n:::");
        assert_eq!(
            doc,
            "# Title\n\n:::{list-table}\n* - a\n  - b\n* - c\n  - \n:::\n\nafter\n"
        );
    }

    #[test]
    fn test_open_block_not_found() {
        assert!(matches!(
            open_block(&FenceLocator, "no table", 0, &ParseOptions::default()),
            Err(ListTableError::BlockNotFound { .. })
        ));
    }

    struct ReadOnly;

    impl ReplacementSink for ReadOnly {
        fn apply_replacement(&mut self, _range: Range<usize>, _text: &str) -> bool {
            false
        }
    }

    #[test]
    fn test_write_block_rejected() {
        let block = open_block(&FenceLocator, DOC, 20, &ParseOptions::default()).unwrap();
        assert_eq!(
            write_block(&mut ReadOnly, block, &SerializeOptions::default()),
            Err(ListTableError::ReplacementRejected)
        );
    }
}
