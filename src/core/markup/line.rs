//! Line classification for list-table markup

use lazy_static::lazy_static;
use regex::Regex;

use crate::data::constants::{CLOSE_FENCE, OPEN_FENCE};

lazy_static! {
    /// `* - content`, optionally indented; content may be empty
    static ref ROW_START: Regex =
        Regex::new(r"^(?P<indent>[ \t]*)\*[ \t]+(?P<dash>-)(?:[ \t]+(?P<content>.*))?$").unwrap();

    /// `- content`, optionally indented; content may be empty
    static ref DASH: Regex =
        Regex::new(r"^(?P<indent>[ \t]*)-(?:[ \t]+(?P<content>.*))?$").unwrap();

    /// `:name: value` directive option at column 0
    static ref OPTION: Regex =
        Regex::new(r"^:(?P<name>[A-Za-z][A-Za-z0-9_-]*):(?:[ \t]+(?P<value>.*))?$").unwrap();
}

/// Shape of one markup line, before any row context is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    Blank,
    OpenFence {
        title: Option<&'a str>,
    },
    CloseFence,
    DirectiveOption {
        name: &'a str,
        value: &'a str,
    },
    RowStart {
        indent: usize,
        /// Column of the `-` after `*`
        dash: usize,
        content: &'a str,
    },
    Dash {
        indent: usize,
        content: &'a str,
    },
    Text {
        indent: usize,
    },
}

impl LineKind<'_> {
    /// Leading whitespace width of the line
    pub(crate) fn indent(&self) -> usize {
        match self {
            LineKind::RowStart { indent, .. }
            | LineKind::Dash { indent, .. }
            | LineKind::Text { indent } => *indent,
            _ => 0,
        }
    }
}

/// Width of the leading run of spaces and tabs
///
/// The run is ASCII, so the width is also a valid byte offset into `line`.
pub(crate) fn indentation(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

/// Classify a line whose trailing whitespace (and `\r`) is already removed
pub(crate) fn classify(line: &str) -> LineKind<'_> {
    if line.trim_start().is_empty() {
        return LineKind::Blank;
    }

    if let Some(rest) = line.strip_prefix(OPEN_FENCE) {
        let title = rest.trim();
        return LineKind::OpenFence {
            title: (!title.is_empty()).then_some(title),
        };
    }
    if line.starts_with(CLOSE_FENCE) {
        return LineKind::CloseFence;
    }

    if let Some(caps) = OPTION.captures(line) {
        if let Some(name) = caps.name("name") {
            return LineKind::DirectiveOption {
                name: name.as_str(),
                value: caps.name("value").map_or("", |m| m.as_str().trim()),
            };
        }
    }

    if let Some(caps) = ROW_START.captures(line) {
        if let (Some(indent), Some(dash)) = (caps.name("indent"), caps.name("dash")) {
            return LineKind::RowStart {
                indent: indent.len(),
                dash: dash.start(),
                content: caps.name("content").map_or("", |m| m.as_str().trim()),
            };
        }
    }

    if let Some(caps) = DASH.captures(line) {
        if let Some(indent) = caps.name("indent") {
            return LineKind::Dash {
                indent: indent.len(),
                content: caps.name("content").map_or("", |m| m.as_str().trim()),
            };
        }
    }

    LineKind::Text {
        indent: indentation(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_start() {
        assert_eq!(
            classify("* - Cell content"),
            LineKind::RowStart {
                indent: 0,
                dash: 2,
                content: "Cell content"
            }
        );
        assert_eq!(
            classify("  *   -   x"),
            LineKind::RowStart {
                indent: 2,
                dash: 6,
                content: "x"
            }
        );
        assert_eq!(
            classify("* -"),
            LineKind::RowStart {
                indent: 0,
                dash: 2,
                content: ""
            }
        );
    }

    #[test]
    fn test_dash_and_text() {
        assert_eq!(
            classify("  - Cell 2"),
            LineKind::Dash {
                indent: 2,
                content: "Cell 2"
            }
        );
        assert_eq!(classify("  -"), LineKind::Dash { indent: 2, content: "" });
        // no space after the dash: plain text
        assert_eq!(classify("    -5 degrees"), LineKind::Text { indent: 4 });
        assert_eq!(classify("*- x"), LineKind::Text { indent: 0 });
    }

    #[test]
    fn test_fences() {
        assert_eq!(classify(":::{list-table}"), LineKind::OpenFence { title: None });
        assert_eq!(
            classify(":::{list-table} Prices "),
            LineKind::OpenFence {
                title: Some("Prices")
            }
        );
        assert_eq!(classify(":::"), LineKind::CloseFence);
        // indented fences are content
        assert_eq!(classify("    :::"), LineKind::Text { indent: 4 });
    }

    #[test]
    fn test_directive_option() {
        assert_eq!(
            classify(":header-rows: 1"),
            LineKind::DirectiveOption {
                name: "header-rows",
                value: "1"
            }
        );
        assert_eq!(
            classify(":class:"),
            LineKind::DirectiveOption {
                name: "class",
                value: ""
            }
        );
    }

    #[test]
    fn test_blank() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify(" \t "), LineKind::Blank);
    }
}
