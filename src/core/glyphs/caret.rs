//! Keystrokes and caret remapping
//!
//! All offsets are `char` offsets into the displayed text. Both glyphs are a
//! single UTF-16 unit, so hosts counting UTF-16 units agree on every offset
//! that lies inside plain BMP text.

use bitflags::bitflags;
use log::trace;

use super::transform::{conceal, normalize_display};
use crate::data::constants::NEWLINE_GLYPH;

bitflags! {
    /// Modifier keys held during a keystroke
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        /// Command on macOS, Windows key elsewhere
        const META = 1 << 3;
    }
}

impl Modifiers {
    /// Modifiers whose shortcuts (copy, paste, undo, ...) the host handles
    pub const PASS_THROUGH: Modifiers = Modifiers::CTRL.union(Modifiers::ALT).union(Modifiers::META);
}

/// Logical key of a keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Escape,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Self {
        let mut chars = key.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Key::Char(ch);
        }
        match key {
            "Enter" => Key::Enter,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "Tab" => Key::Tab,
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            "ArrowUp" => Key::Up,
            "ArrowDown" => Key::Down,
            "Home" => Key::Home,
            "End" => Key::End,
            _ => Key::Other,
        }
    }
}

/// One keystroke in the cell text box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyStroke {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyStroke {
    pub fn new(key: Key) -> Self {
        KeyStroke {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        KeyStroke { key, modifiers }
    }

    /// Whether the keystroke inserts a newline (Shift+Enter included)
    pub fn inserts_newline(&self) -> bool {
        self.key == Key::Enter
    }

    /// Whether the host must handle this keystroke untouched
    pub fn passes_through(&self) -> bool {
        self.modifiers.intersects(Modifiers::PASS_THROUGH)
    }
}

/// Normalized box content and the caret to put back
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Remapped {
    pub text: String,
    pub caret: usize,
}

/// Keep the caret off the spot between `↵` and its real newline
///
/// A caret right after `↵` moves one position left.
pub fn fix_caret(display: &str, caret: usize) -> usize {
    let len = display.chars().count();
    let caret = caret.min(len);
    if caret > 0 && display.chars().nth(caret - 1) == Some(NEWLINE_GLYPH) {
        caret - 1
    } else {
        caret
    }
}

/// Normalize the box after a keystroke and recompute the caret
///
/// `raw` and `caret` are the box content and caret after the keystroke was
/// applied. The caret is mapped through the normalization of the text before
/// it. A non-newline keystroke never leaves it after a `↵`. After "insert
/// newline" it ends past the glyph and the real newline, two positions after
/// where the newline was typed. Returns `None` for pass-through keystrokes.
pub fn remap_caret(raw: &str, caret: usize, stroke: &KeyStroke) -> Option<Remapped> {
    if stroke.passes_through() {
        return None;
    }

    let text = normalize_display(raw);
    let before: String = raw.chars().take(caret).collect();
    let mapped = normalize_display(&before).chars().count();

    let caret = if stroke.inserts_newline() {
        mapped
    } else {
        fix_caret(&text, mapped)
    };

    trace!(
        "caret remap {:?}: {} -> {} ({} -> {} chars)",
        stroke.key,
        before.chars().count(),
        caret,
        raw.chars().count(),
        text.chars().count()
    );
    Some(Remapped { text, caret })
}

/// Plain text of a displayed selection, for the clipboard
pub fn copy_selection(display: &str, start: usize, end: usize) -> String {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    let selected: String = display.chars().skip(start).take(end - start).collect();
    conceal(&selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_caret_moves_off_glyph() {
        assert_eq!(fix_caret("a↵\nb", 2), 1);
        assert_eq!(fix_caret("a↵\nb", 3), 3);
        assert_eq!(fix_caret("a↵\nb", 0), 0);
        assert_eq!(fix_caret("ab", 9), 2);
    }

    #[test]
    fn test_from_dom_key() {
        assert_eq!(Key::from_dom_key("a"), Key::Char('a'));
        assert_eq!(Key::from_dom_key(" "), Key::Char(' '));
        assert_eq!(Key::from_dom_key("Enter"), Key::Enter);
        assert_eq!(Key::from_dom_key("ArrowLeft"), Key::Left);
        assert_eq!(Key::from_dom_key("F5"), Key::Other);
    }

    #[test]
    fn test_pass_through_modifiers() {
        assert!(KeyStroke::with_modifiers(Key::Char('c'), Modifiers::CTRL).passes_through());
        assert!(KeyStroke::with_modifiers(Key::Char('v'), Modifiers::META).passes_through());
        assert!(!KeyStroke::with_modifiers(Key::Enter, Modifiers::SHIFT).passes_through());
        assert!(KeyStroke::with_modifiers(Key::Enter, Modifiers::SHIFT).inserts_newline());
    }

    #[test]
    fn test_copy_selection_strips_glyphs() {
        assert_eq!(copy_selection("a·b↵\nc", 0, 6), "a b\nc");
        assert_eq!(copy_selection("a·b↵\nc", 0, 5), "a b\n");
        assert_eq!(copy_selection("a·b↵\nc", 3, 1), " b");
    }

    #[test]
    fn test_copy_selection_split_at_newline_glyph() {
        // ends on the glyph, before its real newline
        assert_eq!(copy_selection("a·b↵\nc", 0, 4), "a b");
        // starts after the glyph, on the real newline
        assert_eq!(copy_selection("a·b↵\nc", 4, 6), "\nc");
    }
}
