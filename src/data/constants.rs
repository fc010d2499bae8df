//! Markers and glyphs of the list-table grammar
//!
//! Everything here is bit-exact: the serializer emits these strings verbatim
//! and the parser recognizes them.

// ============================================================================
// Fences
// ============================================================================

/// Opening fence of a list-table block
pub const OPEN_FENCE: &str = ":::{list-table}";

/// Closing fence (any column-0 line starting with it closes the block)
pub const CLOSE_FENCE: &str = ":::";

// ============================================================================
// Row / cell markers
// ============================================================================

/// Marker starting a row; its text is column 1
pub const ROW_MARKER: &str = "* - ";

/// Marker starting the second and later cells of a row
pub const CELL_MARKER: &str = "  - ";

/// Indent put in front of every value line after the first
pub const CONTINUATION_INDENT: &str = "    ";

/// Width of `- ` after the dash column; the cell's text starts here
pub const DASH_WIDTH: usize = 2;

/// Prefix of generated column names (`new1`, `new2`, ...)
pub const NEW_COLUMN_PREFIX: &str = "new";

/// Prefix of positional record keys (`col1`, `col2`, ...)
pub const COLUMN_KEY_PREFIX: &str = "col";

// ============================================================================
// Invisible-glyph transform
// ============================================================================

/// Shown in place of a space (MIDDLE DOT)
pub const SPACE_GLYPH: char = '\u{00B7}';

/// Shown in front of every real newline (DOWNWARDS ARROW WITH CORNER LEFTWARDS)
pub const NEWLINE_GLYPH: char = '\u{21B5}';

/// Characters a cell value must not contain before it is revealed
pub const RESERVED_GLYPHS: [char; 2] = [SPACE_GLYPH, NEWLINE_GLYPH];

/// Positional record key for a 0-based column index
#[inline]
pub fn column_key(index: usize) -> String {
    format!("{}{}", COLUMN_KEY_PREFIX, index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_share_content_column() {
        // Both markers put the first character of a value in column 4, the same
        // column continuation lines are written at.
        assert_eq!(ROW_MARKER.len(), CONTINUATION_INDENT.len());
        assert_eq!(CELL_MARKER.len(), CONTINUATION_INDENT.len());
        assert_eq!(ROW_MARKER.find('-').map(|i| i + DASH_WIDTH), Some(4));
    }

    #[test]
    fn test_column_key_is_one_based() {
        assert_eq!(column_key(0), "col1");
        assert_eq!(column_key(11), "col12");
    }
}
