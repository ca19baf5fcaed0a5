// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

use super::{GRAPHEME_BREAK_TABLE, GraphemeBreakProperty};
use crate::CodePoint;

/// Map a code point to its grapheme break property with a binary search over
/// [`GRAPHEME_BREAK_TABLE`]. Anything that isn't listed is
/// [`GraphemeBreakProperty::Other`].
///
/// Surrogate code points (`0xD800..=0xDFFF`), which only show up when UTF-16 input
/// contains an unpaired surrogate, are listed in the data file as `Control`.
#[must_use]
pub fn classify(code_point: CodePoint) -> GraphemeBreakProperty {
    let value = code_point.as_u32();
    GRAPHEME_BREAK_TABLE
        .binary_search_by(|&(first, last, _)| {
            if last < value {
                Ordering::Less
            } else if value < first {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .map_or(GraphemeBreakProperty::Other, |pos| GRAPHEME_BREAK_TABLE[pos].2)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{GraphemeBreakProperty::*, assert_eq2, code_point};

    #[test_case(0x000D, CR ; "carriage return")]
    #[test_case(0x000A, LF ; "line feed")]
    #[test_case(0x0000, Control ; "null")]
    #[test_case(0x00AD, Control ; "soft hyphen")]
    #[test_case(0xD800, Control ; "lone high surrogate")]
    #[test_case(0xDFFF, Control ; "lone low surrogate")]
    #[test_case(0x0301, Extend ; "combining acute accent")]
    #[test_case(0x200C, Extend ; "zero width non joiner")]
    #[test_case(0x1_F1E6, RegionalIndicator ; "regional indicator a")]
    #[test_case(0x1_F1FF, RegionalIndicator ; "regional indicator z")]
    #[test_case(0x0903, SpacingMark ; "devanagari visarga")]
    #[test_case(0x1100, L ; "hangul choseong kiyeok")]
    #[test_case(0x1161, V ; "hangul jungseong a")]
    #[test_case(0x11A8, T ; "hangul jongseong kiyeok")]
    #[test_case(0xAC00, LV ; "hangul syllable ga")]
    #[test_case(0xAC01, LVT ; "hangul syllable gag")]
    #[test_case(0x0600, Prepend ; "arabic number sign")]
    #[test_case(0x270A, EBase ; "raised fist")]
    #[test_case(0x1_F44D, EBase ; "thumbs up")]
    #[test_case(0x1_F3FB, EModifier ; "skin tone 1 2")]
    #[test_case(0x1_F3FF, EModifier ; "skin tone 6")]
    #[test_case(0x200D, ZWJ ; "zero width joiner")]
    #[test_case(0x2764, GlueAfterZwj ; "heavy black heart")]
    #[test_case(0x1_F466, EBaseGAZ ; "boy")]
    #[test_case(0x1_F469, EBaseGAZ ; "woman")]
    #[test_case(0x0041, Other ; "latin capital a")]
    #[test_case(0x0020, Other ; "space")]
    #[test_case(0x1_F600, Other ; "grinning face")]
    #[test_case(0x10_FFFF, Other ; "last code point")]
    fn test_classify(value: u32, expected: GraphemeBreakProperty) {
        assert_eq2!(classify(code_point(value)), expected);
    }

    #[test]
    fn test_table_is_sorted_and_non_overlapping() {
        for window in GRAPHEME_BREAK_TABLE.windows(2) {
            let (_, prev_last, _) = window[0];
            let (next_first, _, _) = window[1];
            assert!(prev_last < next_first, "{window:?}");
        }
        for &(first, last, property) in GRAPHEME_BREAK_TABLE {
            assert!(first <= last);
            assert!(last <= CodePoint::MAX.as_u32());
            assert_ne!(property, Other);
        }
    }

    #[test]
    fn test_every_hangul_syllable_is_lv_or_lvt() {
        // Every 28th syllable, starting from U+AC00, has no trailing consonant.
        for value in 0xAC00..=0xD7A3_u32 {
            let expected = if (value - 0xAC00) % 28 == 0 { LV } else { LVT };
            assert_eq2!(classify(code_point(value)), expected);
        }
    }
}
