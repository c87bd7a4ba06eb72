//! UAX #31 identifier boundaries: `Pattern_Syntax` and `Pattern_White_Space`.
//!
//! Argument names and select option keys end at the first code point carrying
//! either property — the full Unicode sets, not an ASCII approximation, so
//! names like `аргумент` work. Both properties are frozen by Unicode's
//! stability policy (no code point will ever be added or removed), which is
//! what makes a checked-in range table safe.
//!
//! Ranges are inclusive, sorted by code point for binary search. Source:
//! Unicode Character Database `PropList.txt`.

/// `Pattern_Syntax` code point ranges (inclusive).
const PATTERN_SYNTAX: &[(u32, u32)] = &[
    (0x0021, 0x002F), // ! " # $ % & ' ( ) * + , - . /
    (0x003A, 0x0040), // : ; < = > ? @
    (0x005B, 0x005E), // [ \ ] ^
    (0x0060, 0x0060), // `
    (0x007B, 0x007E), // { | } ~
    (0x00A1, 0x00A7), // inverted exclamation .. section sign
    (0x00A9, 0x00A9), // copyright sign
    (0x00AB, 0x00AC), // left guillemet, not sign
    (0x00AE, 0x00AF), // registered sign, macron
    (0x00B0, 0x00B1), // degree sign, plus-minus
    (0x00B6, 0x00B6), // pilcrow
    (0x00BB, 0x00BB), // right guillemet
    (0x00BF, 0x00BF), // inverted question mark
    (0x00D7, 0x00D7), // multiplication sign
    (0x00F7, 0x00F7), // division sign
    (0x2010, 0x2027), // dashes, quotes, daggers, bullet
    (0x2030, 0x203E), // per mille .. overline
    (0x2041, 0x2053), // caret insertion point .. swung dash
    (0x2055, 0x205E), // flower punctuation .. vertical four dots
    (0x2190, 0x245F), // arrows, math operators, technical
    (0x2500, 0x2775), // box drawing .. ornamental brackets
    (0x2794, 0x2BFF), // dingbat arrows .. misc symbols
    (0x2E00, 0x2E7F), // supplemental punctuation
    (0x3001, 0x3003), // ideographic comma, full stop, ditto
    (0x3008, 0x3020), // CJK angle brackets .. postal mark face
    (0x3030, 0x3030), // wavy dash
    (0xFD3E, 0xFD3F), // ornate parentheses
    (0xFE45, 0xFE46), // sesame dots
];

/// `Pattern_White_Space` code point ranges (inclusive).
const PATTERN_WHITE_SPACE: &[(u32, u32)] = &[
    (0x0009, 0x000D), // tab, LF, VT, FF, CR
    (0x0020, 0x0020), // space
    (0x0085, 0x0085), // next line
    (0x200E, 0x200F), // LRM, RLM
    (0x2028, 0x2029), // line separator, paragraph separator
];

/// `true` if `c` carries `Pattern_Syntax` or `Pattern_White_Space`,
/// i.e. `c` terminates an identifier-like run.
pub(crate) fn is_name_boundary(c: char) -> bool {
    let cp = c as u32;
    if cp < 0x80 {
        // ASCII fast path: the four whitespace-plus-space bytes and the
        // ASCII punctuation blocks of Pattern_Syntax.
        return matches!(
            cp,
            0x09..=0x0D | 0x20 | 0x21..=0x2F | 0x3A..=0x40 | 0x5B..=0x5E | 0x60 | 0x7B..=0x7E
        );
    }
    in_table(PATTERN_SYNTAX, cp) || in_table(PATTERN_WHITE_SPACE, cp)
}

fn in_table(table: &[(u32, u32)], cp: u32) -> bool {
    use std::cmp::Ordering;
    table
        .binary_search_by(|&(lo, hi)| {
            if cp < lo {
                Ordering::Greater
            } else if cp > hi {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}
