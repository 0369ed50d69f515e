//! Character-level folding applied before any trie comparison.

/// Distance between a full-width form (U+FF01..U+FF5E) and its ASCII counterpart.
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Distance between a full-width uppercase letter and the ASCII lowercase letter.
const FULLWIDTH_UPPER_OFFSET: u32 = FULLWIDTH_OFFSET - 0x20;

pub fn is_fullwidth(c: char) -> bool {
    ('\u{FF01}'..='\u{FF5E}').contains(&c)
}

/// Map a character to the form used for comparison.
///
/// ASCII and full-width Latin letters fold to ASCII lowercase, the remaining
/// full-width forms fold to their half-width codepoint, and everything else
/// is returned unchanged. The mapping is idempotent.
pub fn canonicalize(c: char) -> char {
    match c {
        'A'..='Z' => c.to_ascii_lowercase(),
        'Ａ'..='Ｚ' => shift_down(c, FULLWIDTH_UPPER_OFFSET),
        'ａ'..='ｚ' => shift_down(c, FULLWIDTH_OFFSET),
        c if is_fullwidth(c) => shift_down(c, FULLWIDTH_OFFSET),
        _ => c,
    }
}

fn shift_down(c: char, by: u32) -> char {
    char::from_u32(c as u32 - by).unwrap_or(c)
}

/// Canonicalize every character of `s`.
pub fn normalize(s: &str) -> String {
    s.chars().map(canonicalize).collect()
}
