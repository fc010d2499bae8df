//! Codec configuration

#[cfg(feature = "serde")]
use crate::utils::error::{ListTableError, ListTableResult};

/// Options controlling how markup is parsed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseOptions {
    /// Fail on the first line tolerant mode would skip
    /// Default: false
    pub strict: bool,

    /// Fail when either fence line is missing
    /// Default: false
    pub require_fence: bool,
}

impl ParseOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict parsing of a fully fenced block
    pub fn strict() -> Self {
        Self {
            strict: true,
            require_fence: true,
        }
    }
}

/// Line terminator used by the serializer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }

    /// Pick the terminator a document already uses
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::Crlf
        } else {
            LineEnding::Lf
        }
    }
}

/// What serializing a grid with no rows does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EmptyGridPolicy {
    /// Write the fences (and directive) with nothing between them
    #[default]
    EmitEmptyBlock,
    /// Fail with `EmptyGridWrite`
    Reject,
}

/// Options controlling how a grid is written back
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SerializeOptions {
    /// Blank line after the fence header and after every row
    /// Default: true
    pub blank_line_between_rows: bool,

    /// Default: LF
    pub line_ending: LineEnding,

    /// Default: emit an empty block
    pub empty_grid: EmptyGridPolicy,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            blank_line_between_rows: true,
            line_ending: LineEnding::Lf,
            empty_grid: EmptyGridPolicy::EmitEmptyBlock,
        }
    }
}

impl SerializeOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// No blank lines between rows
    pub fn compact() -> Self {
        Self {
            blank_line_between_rows: false,
            ..Self::default()
        }
    }
}

/// Complete codec configuration, as loaded from a config file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ListTableOptions {
    pub parse: ParseOptions,
    pub serialize: SerializeOptions,
}

impl ListTableOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict parsing, default serialization
    pub fn strict() -> Self {
        Self {
            parse: ParseOptions::strict(),
            serialize: SerializeOptions::default(),
        }
    }

    /// Tolerant parsing, compact serialization
    pub fn compact() -> Self {
        Self {
            parse: ParseOptions::default(),
            serialize: SerializeOptions::compact(),
        }
    }

    /// Load options from TOML text; missing keys keep their defaults
    #[cfg(feature = "serde")]
    pub fn from_toml_str(text: &str) -> ListTableResult<Self> {
        toml::from_str(text).map_err(|err| ListTableError::config(err.to_string()))
    }

    /// Load options from a TOML file
    #[cfg(all(feature = "serde", not(target_arch = "wasm32")))]
    pub fn load(path: impl AsRef<std::path::Path>) -> ListTableResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Whether TOML text sets `[serialize] line_ending` itself
    ///
    /// Callers that would otherwise follow the document's own line endings
    /// use this to tell an explicit `"lf"` from the default.
    #[cfg(feature = "serde")]
    pub fn toml_sets_line_ending(text: &str) -> bool {
        text.parse::<toml::Table>()
            .ok()
            .and_then(|table| table.get("serialize")?.get("line_ending").cloned())
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_tolerant() {
        let opts = ListTableOptions::default();
        assert!(!opts.parse.strict);
        assert!(!opts.parse.require_fence);
        assert!(opts.serialize.blank_line_between_rows);
        assert_eq!(opts.serialize.line_ending, LineEnding::Lf);
        assert_eq!(opts.serialize.empty_grid, EmptyGridPolicy::EmitEmptyBlock);
    }

    #[test]
    fn test_presets() {
        assert!(ListTableOptions::strict().parse.strict);
        assert!(ListTableOptions::strict().parse.require_fence);
        assert!(!ListTableOptions::compact().serialize.blank_line_between_rows);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_toml_sets_line_ending() {
        assert!(ListTableOptions::toml_sets_line_ending(
            "[serialize]\nline_ending = \"lf\"\n"
        ));
        assert!(!ListTableOptions::toml_sets_line_ending(
            "[serialize]\nblank_line_between_rows = false\n"
        ));
        assert!(!ListTableOptions::toml_sets_line_ending("line_ending = \"crlf\"\n"));
        assert!(!ListTableOptions::toml_sets_line_ending(""));
    }

    #[test]
    fn test_detect_line_ending() {
        assert_eq!(LineEnding::detect("a\r\nb"), LineEnding::Crlf);
        assert_eq!(LineEnding::detect("a\nb"), LineEnding::Lf);
        assert_eq!(LineEnding::Crlf.as_str(), "\r\n");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_toml_partial() {
        let opts = ListTableOptions::from_toml_str(
            r#"
            [parse]
            strict = true

            [serialize]
            line_ending = "crlf"
            empty_grid = "reject"
            "#,
        )
        .unwrap();
        assert!(opts.parse.strict);
        assert!(!opts.parse.require_fence);
        assert!(opts.serialize.blank_line_between_rows);
        assert_eq!(opts.serialize.line_ending, LineEnding::Crlf);
        assert_eq!(opts.serialize.empty_grid, EmptyGridPolicy::Reject);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_toml_rejects_bad_value() {
        let err = ListTableOptions::from_toml_str("[serialize]\nline_ending = \"cr\"\n").unwrap_err();
        assert!(matches!(err, ListTableError::Config { .. }));
    }
}
