//! WASM bindings for listab
//!
//! This module provides JavaScript-accessible functions for the grid webview:
//! parsing a block into row records, writing records back, and the
//! visible-whitespace helpers of the cell text box.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::core::glyphs::{Key, KeyStroke, Modifiers};
#[cfg(feature = "wasm")]
use crate::{Directive, Fencing, Grid, ParseOptions, RawRecord, Record, SerializeOptions, SkippedLine, Table};

/// Parse result (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ParseResult {
    /// One `col1, col2, ...` object per row
    pub records: Vec<Record>,
    pub directive: Directive,
    pub fencing: Option<Fencing>,
    pub skipped: Vec<SkippedLine>,
    /// Whether parsing was successful
    pub success: bool,
    /// Error message if parsing failed
    pub error: Option<String>,
}

/// A keyboard event as the webview sees it
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
pub struct KeyEventInput {
    /// `KeyboardEvent.key`
    pub key: String,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub meta: bool,
}

#[cfg(feature = "wasm")]
impl KeyEventInput {
    fn to_keystroke(&self) -> KeyStroke {
        let mut modifiers = Modifiers::empty();
        modifiers.set(Modifiers::SHIFT, self.shift);
        modifiers.set(Modifiers::CTRL, self.ctrl);
        modifiers.set(Modifiers::ALT, self.alt);
        modifiers.set(Modifiers::META, self.meta);
        KeyStroke::with_modifiers(Key::from_dom_key(&self.key), modifiers)
    }
}

/// Records are plain objects on the JS side, not `Map`s
#[cfg(feature = "wasm")]
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

#[cfg(feature = "wasm")]
fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Parse a list-table block into row records
///
/// # Arguments
/// * `input` - The block text, fences included
/// * `options` - `{ strict, require_fence }`, both optional
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "parseListTable")]
pub fn parse_list_table_wasm(input: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let opts: ParseOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();

    let result = match crate::parse_with_options(input, &opts) {
        Ok(parsed) => ParseResult {
            records: parsed.grid.to_records(),
            directive: parsed.directive,
            fencing: Some(parsed.fencing),
            skipped: parsed.skipped,
            success: true,
            error: None,
        },
        Err(err) => ParseResult {
            records: Vec::new(),
            directive: Directive::default(),
            fencing: None,
            skipped: Vec::new(),
            success: false,
            error: Some(err.to_string()),
        },
    };
    to_js(&result)
}

/// Write row records back as list-table markup
///
/// # Arguments
/// * `records` - Array of `col1, col2, ...` objects; `null` cells become empty
/// * `directive` - `{ title, options }` from `parseListTable`, or undefined
/// * `options` - `{ blank_line_between_rows, line_ending, empty_grid }`, all optional
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "serializeListTable")]
pub fn serialize_list_table_wasm(
    records: JsValue,
    directive: JsValue,
    options: JsValue,
) -> Result<String, JsValue> {
    let records: Vec<RawRecord> = serde_wasm_bindgen::from_value(records)?;
    let directive: Directive = serde_wasm_bindgen::from_value(directive).unwrap_or_default();
    let opts: SerializeOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();

    let grid = Grid::from_records(&records).map_err(js_error)?;
    crate::serialize_with_options(&Table { directive, grid }, &opts).map_err(js_error)
}

/// Show spaces and newlines of a cell value
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "revealInvisibles")]
pub fn reveal_invisibles_wasm(value: &str) -> Result<String, JsValue> {
    crate::reveal(value).map_err(js_error)
}

/// Turn displayed text back into a cell value
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "concealInvisibles")]
pub fn conceal_invisibles_wasm(display: &str) -> String {
    crate::conceal(display)
}

/// Normalize the text box after a keystroke
///
/// Returns `{ text, caret }`, or `null` when the keystroke is a host shortcut
/// and the box must be left alone.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "remapCaret")]
pub fn remap_caret_wasm(raw: &str, caret: usize, event: JsValue) -> Result<JsValue, JsValue> {
    let event: KeyEventInput = serde_wasm_bindgen::from_value(event)?;
    match crate::remap_caret(raw, caret, &event.to_keystroke()) {
        Some(remapped) => to_js(&remapped),
        None => Ok(JsValue::NULL),
    }
}

/// Move a caret that sits between `↵` and its newline (click, key up)
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "fixCaret")]
pub fn fix_caret_wasm(display: &str, caret: usize) -> usize {
    crate::fix_caret(display, caret)
}

/// Clipboard text for a selection of the text box
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "copySelection")]
pub fn copy_selection_wasm(display: &str, start: usize, end: usize) -> String {
    crate::copy_selection(display, start, end)
}

/// Markup of the empty 2x2 table inserted by "insert list-table"
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "insertTemplate")]
pub fn insert_template_wasm() -> String {
    crate::templates::insert_template()
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
