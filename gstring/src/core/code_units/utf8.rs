// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rust strings are UTF-8, where a code point takes 1 to 4 bytes. The first byte of a
//! code point is a lead byte, and the rest are continuation bytes (`0b10xx_xxxx`).
//!
//! ```text
//! "a✊" = U+0061 U+270A
//!
//! index:  0    1    2    3
//! bytes:  61   E2   9C   8A
//!              └─ lead + 2 continuation ─┘
//! ```

use super::CodePoint;

const CONTINUATION_MASK: u8 = 0b1100_0000;
const CONTINUATION_TAG: u8 = 0b1000_0000;

#[must_use]
pub fn is_utf8_continuation_byte(byte: u8) -> bool {
    byte & CONTINUATION_MASK == CONTINUATION_TAG
}

/// Decode the code point that contains the byte at `index`. If `index` points into the
/// middle of a multi byte sequence, this walks back to the lead byte first, the same
/// way a low surrogate looks back for its high surrogate in UTF-16.
///
/// # Panics
///
/// Panics if `index` is out of bounds.
#[must_use]
pub fn decode_utf8_at(text: &str, index: usize) -> CodePoint {
    assert!(
        index < text.len(),
        "byte index {index} out of bounds for length {}",
        text.len()
    );

    let mut start = index;
    while !text.is_char_boundary(start) {
        start -= 1;
    }

    text[start..]
        .chars()
        .next()
        .map_or(CodePoint::default(), CodePoint::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_continuation_bytes() {
        let bytes = "a✊".as_bytes();
        assert!(!is_utf8_continuation_byte(bytes[0]));
        assert!(!is_utf8_continuation_byte(bytes[1]));
        assert!(is_utf8_continuation_byte(bytes[2]));
        assert!(is_utf8_continuation_byte(bytes[3]));
    }

    #[test]
    fn test_decode_from_any_byte_of_sequence() {
        let text = "a✊🏻";
        assert_eq2!(decode_utf8_at(text, 0), CodePoint(0x61));
        for index in 1..4 {
            assert_eq2!(decode_utf8_at(text, index), CodePoint(0x270A));
        }
        for index in 4..8 {
            assert_eq2!(decode_utf8_at(text, index), CodePoint(0x1_F3FB));
        }
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_decode_out_of_bounds() { let _ = decode_utf8_at("a", 1); }
}
