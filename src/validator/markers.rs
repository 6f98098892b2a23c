//! Byte-range to character-offset bookkeeping for position markers.

use std::ops::Range;

use regex::Regex;

/// Character offset of byte index `byte` in `s`.
pub(super) fn char_offset(s: &str, byte: usize) -> usize {
    s[..byte].chars().count()
}

/// Character offsets covered by the byte range `range` of `s`.
pub(super) fn char_range(s: &str, range: Range<usize>) -> Range<usize> {
    let start = char_offset(s, range.start);
    start..start + s[range].chars().count()
}

/// Character offsets covered by every match of `re` in `s`, ascending.
pub(super) fn matched_offsets(re: &Regex, s: &str) -> Vec<usize> {
    re.find_iter(s)
        .flat_map(|m| char_range(s, m.range()))
        .collect()
}

/// Replace every whitespace code point with a plain space.
///
/// Folding is one char to one char, so offsets into the result are offsets
/// into the input.
pub(super) fn fold_whitespace(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect()
}
