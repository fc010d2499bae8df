//! Reveal / conceal of spaces and newlines

use crate::data::constants::{NEWLINE_GLYPH, RESERVED_GLYPHS, SPACE_GLYPH};
use crate::utils::error::{ListTableError, ListTableResult};

/// First reserved glyph in `value`, as (char offset, glyph)
pub fn find_reserved_glyph(value: &str) -> Option<(usize, char)> {
    value
        .chars()
        .enumerate()
        .find(|(_, ch)| RESERVED_GLYPHS.contains(ch))
}

/// Make spaces and newlines visible
///
/// Every space becomes `·`; every `\n` becomes `↵` followed by the real
/// newline, so the text box still breaks the line there. Fails when the value
/// already contains one of the glyphs, since `conceal` could not tell it
/// apart from a revealed space or newline.
pub fn reveal(value: &str) -> ListTableResult<String> {
    if let Some((offset, glyph)) = find_reserved_glyph(value) {
        return Err(ListTableError::EncodingCollision { glyph, offset });
    }
    Ok(reveal_unchecked(value))
}

/// [`reveal`] for text already known to be glyph-free
pub(crate) fn reveal_unchecked(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + value.len() / 2);
    for ch in value.chars() {
        match ch {
            ' ' => out.push(SPACE_GLYPH),
            '\n' => {
                out.push(NEWLINE_GLYPH);
                out.push('\n');
            }
            c => out.push(c),
        }
    }
    out
}

/// Inverse of [`reveal`]
///
/// `·` becomes a space and every `↵` is dropped, leaving the real newline
/// after it. The result never contains a reserved glyph.
pub fn conceal(display: &str) -> String {
    display
        .chars()
        .filter(|ch| *ch != NEWLINE_GLYPH)
        .map(|ch| if ch == SPACE_GLYPH { ' ' } else { ch })
        .collect()
}

/// Conceal then reveal: the canonical display form of whatever the box holds
///
/// Glyphs typed literally are folded into the characters they stand for, and
/// a `↵` whose newline was deleted disappears with it.
pub fn normalize_display(raw: &str) -> String {
    reveal_unchecked(&conceal(raw))
}
