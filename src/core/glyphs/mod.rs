//! Invisible-Glyph Transform
//!
//! Cell values are edited in a plain text box where spaces and newlines are
//! shown as `·` and `↵`. [`reveal`] and [`conceal`] convert between the two
//! forms, [`remap_caret`] keeps the box and its caret consistent after each
//! keystroke, and [`CellEditor`] ties them into the life of one box.
//!
//! ```rust
//! use listab::core::glyphs::{conceal, reveal};
//!
//! let shown = reveal("a b\nc").unwrap();
//! assert_eq!(shown, "a·b↵\nc");
//! assert_eq!(conceal(&shown), "a b\nc");
//! ```

mod caret;
mod editor;
mod transform;


pub use caret::{copy_selection, fix_caret, remap_caret, Key, KeyStroke, Modifiers, Remapped};
pub use editor::{CellEditor, KeyAction};
pub use transform::{conceal, find_reserved_glyph, normalize_display, reveal};
