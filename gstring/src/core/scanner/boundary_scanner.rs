// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::iter::FusedIterator;

use super::{ScanResult, scan_next_boundary_with_window};
use crate::{BreakWindow, TextBuffer};

/// Walks every grapheme cluster boundary in a buffer, in order. Each item is the
/// exclusive end index of the next cluster, so the last item is always the buffer
/// length. Nothing is yielded for an empty buffer.
///
/// The cursor and the [`BreakWindow`] are the only state, and both are local to this
/// scanner.
///
/// ```
/// use r3bl_gstring::BoundaryScanner;
///
/// let boundaries: Vec<usize> = BoundaryScanner::new("a\r\nb").collect();
/// assert_eq!(boundaries, vec![1, 3, 4]);
/// ```
#[derive(Debug)]
pub struct BoundaryScanner<'a, T: TextBuffer + ?Sized> {
    buffer: &'a T,
    cursor: usize,
    window: BreakWindow,
}

impl<'a, T: TextBuffer + ?Sized> BoundaryScanner<'a, T> {
    #[must_use]
    pub fn new(buffer: &'a T) -> Self {
        Self {
            buffer,
            cursor: 0,
            window: BreakWindow::new(Default::default()),
        }
    }

    #[must_use]
    pub fn buffer(&self) -> &'a T { self.buffer }

    /// Start of the cluster that the next call to [`Self::next_scan`] will end.
    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    #[must_use]
    pub fn is_done(&self) -> bool { self.cursor >= self.buffer.unit_len() }

    /// Scan forward to the next boundary and move the cursor there.
    pub fn next_scan(&mut self) -> Option<ScanResult> {
        if self.is_done() {
            return None;
        }
        let result =
            scan_next_boundary_with_window(self.buffer, self.cursor, &mut self.window);
        self.cursor = result.index;
        Some(result)
    }
}

impl<T: TextBuffer + ?Sized> Iterator for BoundaryScanner<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> { self.next_scan().map(|it| it.index) }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.unit_len().saturating_sub(self.cursor);
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl<T: TextBuffer + ?Sized> FusedIterator for BoundaryScanner<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BreakDecision, assert_eq2, next_boundary};

    #[test]
    fn test_empty_buffer_yields_nothing() {
        let mut scanner = BoundaryScanner::new("");
        assert!(scanner.is_done());
        assert_eq2!(scanner.next(), None);
        assert_eq2!(scanner.next(), None);
    }

    #[test]
    fn test_boundaries_are_strictly_increasing_and_end_at_len() {
        let text = "ก\u{0E31}\u{0E49}a\u{301}\u{302}\r\n🇯🇵🇺\u{270A}\u{1F3FB}";
        let boundaries: Vec<usize> = BoundaryScanner::new(text).collect();
        assert!(boundaries.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq2!(boundaries.last().copied(), Some(text.len()));
    }

    #[test]
    fn test_matches_repeated_next_boundary() {
        let units: Vec<u16> = "x👨\u{200D}👩\u{200D}👧y🇯🇵🇯🇵".encode_utf16().collect();
        let mut expected = vec![];
        let mut index = 0;
        while index < units.len() {
            index = next_boundary(&units[..], index);
            expected.push(index);
        }
        let actual: Vec<usize> = BoundaryScanner::new(&units[..]).collect();
        assert_eq2!(actual, expected);
    }

    #[test]
    fn test_next_scan_moves_cursor() {
        let mut scanner = BoundaryScanner::new("ab");
        assert_eq2!(scanner.cursor(), 0);
        assert_eq2!(
            scanner.next_scan(),
            Some(ScanResult {
                index: 1,
                decision: Some(BreakDecision::BreakAtStart)
            })
        );
        assert_eq2!(scanner.cursor(), 1);
        assert_eq2!(scanner.next(), Some(2));
        assert!(scanner.is_done());
    }
}
