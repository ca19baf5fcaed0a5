// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! UTF-16 encodes code points above `U+FFFF` as a surrogate pair: a high surrogate in
//! `0xD800..=0xDBFF` followed by a low surrogate in `0xDC00..=0xDFFF`.
//!
//! ```text
//! "🇯🇵" = U+1F1EF U+1F1F5
//!
//! index:  0      1      2      3
//! units:  D83C   DDEF   D83C   DDF5
//!         └─ pair ─┘    └─ pair ─┘
//! ```
//!
//! Unpaired surrogates are tolerated. They decode to their raw 16 bit value.

use super::CodePoint;

pub const HIGH_SURROGATE_START: u16 = 0xD800;
pub const HIGH_SURROGATE_END: u16 = 0xDBFF;
pub const LOW_SURROGATE_START: u16 = 0xDC00;
pub const LOW_SURROGATE_END: u16 = 0xDFFF;
pub const SUPPLEMENTARY_PLANE_START: u32 = 0x1_0000;

#[must_use]
pub fn is_high_surrogate(unit: u16) -> bool {
    (HIGH_SURROGATE_START..=HIGH_SURROGATE_END).contains(&unit)
}

#[must_use]
pub fn is_low_surrogate(unit: u16) -> bool {
    (LOW_SURROGATE_START..=LOW_SURROGATE_END).contains(&unit)
}

fn combine_surrogates(high: u16, low: u16) -> CodePoint {
    let high = u32::from(high - HIGH_SURROGATE_START);
    let low = u32::from(low - LOW_SURROGATE_START);
    CodePoint(high * 0x400 + low + SUPPLEMENTARY_PLANE_START)
}

/// Decode the code point at `index`, resolving a surrogate pair in either direction:
/// - A high surrogate followed by a low surrogate combines with the unit after it.
/// - A low surrogate preceded by a high surrogate combines with the unit before it.
/// - Anything else (including an unpaired surrogate) is returned as is.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
#[must_use]
pub fn decode_utf16_at(units: &[u16], index: usize) -> CodePoint {
    let unit = units[index];

    if is_high_surrogate(unit) && index + 1 < units.len() {
        let next = units[index + 1];
        if is_low_surrogate(next) {
            return combine_surrogates(unit, next);
        }
        return CodePoint::from(unit);
    }

    if is_low_surrogate(unit) && index >= 1 {
        let prev = units[index - 1];
        if is_high_surrogate(prev) {
            return combine_surrogates(prev, unit);
        }
        return CodePoint::from(unit);
    }

    CodePoint::from(unit)
}

/// `true` iff the unit at `index` is a high surrogate and the unit at `index + 1` is a
/// low surrogate. Out of bounds indices are never a pair.
#[must_use]
pub fn is_surrogate_pair_at(units: &[u16], index: usize) -> bool {
    match (units.get(index), index.checked_add(1).and_then(|it| units.get(it))) {
        (Some(&high), Some(&low)) => is_high_surrogate(high) && is_low_surrogate(low),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn utf16(text: &str) -> Vec<u16> { text.encode_utf16().collect() }

    #[test]
    fn test_decode_bmp() {
        let units = utf16("aé");
        assert_eq2!(decode_utf16_at(&units, 0), CodePoint('a' as u32));
        assert_eq2!(decode_utf16_at(&units, 1), CodePoint(0xE9));
    }

    #[test]
    fn test_decode_pair_from_either_half() {
        let units = utf16("🇯🇵");
        assert_eq2!(units, vec![0xD83C, 0xDDEF, 0xD83C, 0xDDF5]);
        assert_eq2!(decode_utf16_at(&units, 0), CodePoint(0x1_F1EF));
        assert_eq2!(decode_utf16_at(&units, 1), CodePoint(0x1_F1EF));
        assert_eq2!(decode_utf16_at(&units, 2), CodePoint(0x1_F1F5));
        assert_eq2!(decode_utf16_at(&units, 3), CodePoint(0x1_F1F5));
    }

    #[test_case(&[0xD83C], 0, 0xD83C ; "high surrogate at end")]
    #[test_case(&[0xD83C, 0x0041], 0, 0xD83C ; "high surrogate before non low")]
    #[test_case(&[0xDDEF], 0, 0xDDEF ; "low surrogate at start")]
    #[test_case(&[0x0041, 0xDDEF], 1, 0xDDEF ; "low surrogate after non high")]
    #[test_case(&[0xDDEF, 0xD83C], 1, 0xD83C ; "reversed pair")]
    fn test_decode_unpaired_surrogates(units: &[u16], index: usize, expected: u32) {
        assert_eq2!(decode_utf16_at(units, index), CodePoint(expected));
    }

    #[test]
    fn test_is_surrogate_pair_at() {
        let units = utf16("a🇯");
        assert!(!is_surrogate_pair_at(&units, 0));
        assert!(is_surrogate_pair_at(&units, 1));
        assert!(!is_surrogate_pair_at(&units, 2));
        assert!(!is_surrogate_pair_at(&units, 3));
        assert!(!is_surrogate_pair_at(&units, usize::MAX));
    }
}
