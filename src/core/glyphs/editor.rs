//! State of one free-text cell box

use super::caret::{self, Key, KeyStroke, Remapped};
use super::transform::{conceal, reveal};
use crate::utils::error::ListTableResult;

/// What the host should do after a key went through [`CellEditor::handle_key`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Let the text box handle the key
    Pass,
    /// Close the box and keep the cell unchanged
    Discard,
}

/// A revealed cell value being edited
///
/// The display text is the only thing the box ever holds; the cell value is
/// recovered with a single conceal in [`commit`](CellEditor::commit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEditor {
    original: String,
    display: String,
    caret: usize,
    selection: Option<(usize, usize)>,
}

impl CellEditor {
    /// Open a box on `value`, caret at the end
    pub fn begin(value: &str) -> ListTableResult<Self> {
        let display = reveal(value)?;
        let caret = display.chars().count();
        Ok(CellEditor {
            original: value.to_string(),
            display,
            caret,
            selection: None,
        })
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    /// Text currently shown in the box, glyphs included
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }

    /// Take the box content after a keystroke
    ///
    /// Returns the normalized text and caret to write back into the box, or
    /// `None` when the keystroke belongs to the host (copy, paste, undo...).
    /// In that case the raw content is kept as is.
    pub fn apply_input(&mut self, raw: &str, caret: usize, stroke: &KeyStroke) -> Option<Remapped> {
        self.selection = None;
        match caret::remap_caret(raw, caret, stroke) {
            Some(remapped) => {
                self.display = remapped.text.clone();
                self.caret = remapped.caret;
                Some(remapped)
            }
            None => {
                self.display = raw.to_string();
                self.caret = caret.min(raw.chars().count());
                None
            }
        }
    }

    /// Caret moved without a content change (click, arrow key up)
    pub fn fix_caret(&mut self, caret: usize) -> usize {
        self.caret = if self.selection.is_some() {
            caret.min(self.display.chars().count())
        } else {
            caret::fix_caret(&self.display, caret)
        };
        self.caret
    }

    /// Record a selection; an empty range clears it
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.display.chars().count();
        let (start, end) = (start.min(len), end.min(len));
        self.selection = if start == end { None } else { Some((start, end)) };
        self.caret = end;
    }

    /// Clipboard text for the current selection
    pub fn copy_selection(&self) -> Option<String> {
        self.selection
            .map(|(start, end)| caret::copy_selection(&self.display, start, end))
    }

    pub fn handle_key(&self, stroke: &KeyStroke) -> KeyAction {
        if stroke.key == Key::Escape && !stroke.passes_through() {
            KeyAction::Discard
        } else {
            KeyAction::Pass
        }
    }

    /// Concealed value as it would be committed now
    pub fn value(&self) -> String {
        conceal(&self.display)
    }

    pub fn is_modified(&self) -> bool {
        self.value() != self.original
    }

    /// Close the box and return the new cell value
    pub fn commit(self) -> String {
        conceal(&self.display)
    }

    /// Close the box and return the untouched original value
    pub fn cancel(self) -> String {
        self.original
    }
}
