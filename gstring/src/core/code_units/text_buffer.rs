// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{CodePoint, decode_utf16_at, decode_utf8_at, is_surrogate_pair_at,
            is_utf8_continuation_byte};

/// A read only text buffer that is addressed by code unit index.
///
/// All boundary indices produced by this crate are code unit indices into the buffer
/// that was scanned: UTF-16 units for `[u16]` and bytes for [`str`].
///
/// This trait is implemented for:
/// - `[u16]`: UTF-16 code units. Unpaired surrogates are allowed.
/// - [`str`]: UTF-8 bytes. Every boundary produced for a `str` is a char boundary, so
///   slicing never panics.
pub trait TextBuffer {
    /// Number of code units in the buffer.
    fn unit_len(&self) -> usize;

    /// Decode the code point at `index`. When `index` is the trailing unit of a multi
    /// unit code point, the whole code point is decoded.
    fn decode_at(&self, index: usize) -> CodePoint;

    /// `true` when the unit at `index` belongs to a code point that started at an
    /// earlier index, and has therefore already been consumed by the scanner.
    fn continues_previous_at(&self, index: usize) -> bool;

    /// Zero copy view of the units in `start..end`.
    fn slice(&self, start: usize, end: usize) -> &Self;
}

impl TextBuffer for [u16] {
    fn unit_len(&self) -> usize { self.len() }

    fn decode_at(&self, index: usize) -> CodePoint { decode_utf16_at(self, index) }

    fn continues_previous_at(&self, index: usize) -> bool {
        index >= 1 && is_surrogate_pair_at(self, index - 1)
    }

    fn slice(&self, start: usize, end: usize) -> &Self { &self[start..end] }
}

impl TextBuffer for str {
    fn unit_len(&self) -> usize { self.len() }

    fn decode_at(&self, index: usize) -> CodePoint { decode_utf8_at(self, index) }

    fn continues_previous_at(&self, index: usize) -> bool {
        self.as_bytes()
            .get(index)
            .is_some_and(|&byte| is_utf8_continuation_byte(byte))
    }

    fn slice(&self, start: usize, end: usize) -> &Self { &self[start..end] }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_utf16_buffer() {
        let units: Vec<u16> = "x🇯".encode_utf16().collect();
        let buffer: &[u16] = &units;
        assert_eq2!(buffer.unit_len(), 3);
        assert!(!buffer.continues_previous_at(0));
        assert!(!buffer.continues_previous_at(1));
        assert!(buffer.continues_previous_at(2));
        assert_eq2!(buffer.decode_at(2), CodePoint(0x1_F1EF));
        assert_eq2!(buffer.slice(1, 3), &units[1..3]);
    }

    #[test]
    fn test_utf8_buffer() {
        let text = "x🇯";
        assert_eq2!(text.unit_len(), 5);
        assert!(!text.continues_previous_at(0));
        assert!(!text.continues_previous_at(1));
        assert!(text.continues_previous_at(2));
        assert!(text.continues_previous_at(4));
        assert!(!text.continues_previous_at(5));
        assert_eq2!(text.decode_at(3), CodePoint(0x1_F1EF));
        assert_eq2!(text.slice(1, 5), "🇯");
    }
}
