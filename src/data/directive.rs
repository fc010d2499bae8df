//! Known `list-table` directive options
//!
//! These are the options MyST documents for `{list-table}`. Unknown options
//! are still preserved through a round trip; this table only decides which
//! ones get a warning.

use phf::phf_map;

/// Option name to a short description of its value
pub static LIST_TABLE_OPTIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "header-rows" => "number of leading rows rendered as table header",
    "stub-columns" => "number of leading columns rendered as row headers",
    "widths" => "space-separated relative column widths, or `auto`",
    "width" => "table width as a length or percentage",
    "align" => "table alignment: left, center or right",
    "class" => "space-separated CSS classes",
    "name" => "reference target name",
};

/// Check if an option name is a documented list-table option
#[inline]
pub fn is_known_option(name: &str) -> bool {
    LIST_TABLE_OPTIONS.contains_key(name)
}

/// Describe the value expected by a known option
#[inline]
pub fn option_hint(name: &str) -> Option<&'static str> {
    LIST_TABLE_OPTIONS.get(name).copied()
}

/// Known option an unknown name was probably meant to be, with its hint
///
/// Catches the usual slips: `_` for `-` and wrong case.
pub fn suggest_option(name: &str) -> Option<(&'static str, &'static str)> {
    let spelled = name.trim().to_ascii_lowercase().replace('_', "-");
    let known = *LIST_TABLE_OPTIONS.get_key(spelled.as_str())?;
    option_hint(known).map(|hint| (known, hint))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_options() {
        assert!(is_known_option("header-rows"));
        assert!(is_known_option("widths"));
        assert!(!is_known_option("header_rows"));
        assert!(!is_known_option("colour"));
    }

    #[test]
    fn test_option_hint() {
        assert!(option_hint("align").is_some_and(|h| h.contains("center")));
        assert_eq!(option_hint("unknown"), None);
    }

    #[test]
    fn test_suggest_option() {
        assert_eq!(
            suggest_option("header_rows"),
            Some(("header-rows", option_hint("header-rows").unwrap_or_default()))
        );
        assert_eq!(suggest_option("Widths").map(|(name, _)| name), Some("widths"));
        assert_eq!(suggest_option("colour"), None);
    }
}
