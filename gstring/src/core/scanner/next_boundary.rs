// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BreakDecision, BreakWindow, TextBuffer, classify};

/// Where the scan for the next boundary stopped, and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanResult {
    /// Absolute code unit index of the boundary. Equal to the buffer length when the
    /// current cluster runs to the end of the buffer.
    pub index: usize,
    /// The decision that produced the boundary. [`None`] when the end of the buffer was
    /// reached first.
    pub decision: Option<BreakDecision>,
}

/// Returns the code unit index where the grapheme cluster that starts at `from_index`
/// ends. The end of the buffer is always a boundary, so for any `from_index` at or past
/// the last code unit this returns the buffer length.
///
/// ```
/// use r3bl_gstring::next_boundary;
///
/// let units: Vec<u16> = "a🇯🇵b".encode_utf16().collect();
/// assert_eq!(next_boundary(&units[..], 0), 1);
/// assert_eq!(next_boundary(&units[..], 1), 5);
/// assert_eq!(next_boundary(&units[..], 5), 6);
/// ```
#[must_use]
pub fn next_boundary<T: TextBuffer + ?Sized>(buffer: &T, from_index: usize) -> usize {
    scan_next_boundary(buffer, from_index).index
}

/// Same as [`next_boundary`], but also reports the [`BreakDecision`] that ended the
/// cluster.
#[must_use]
pub fn scan_next_boundary<T: TextBuffer + ?Sized>(
    buffer: &T,
    from_index: usize,
) -> ScanResult {
    let mut window = BreakWindow::new(Default::default());
    scan_next_boundary_with_window(buffer, from_index, &mut window)
}

/// Same as [`scan_next_boundary`], but reuses the given `window` (whatever it held is
/// discarded). Scanning many clusters in a row with one window keeps any heap
/// allocation made for a long middle run.
pub fn scan_next_boundary_with_window<T: TextBuffer + ?Sized>(
    buffer: &T,
    from_index: usize,
    window: &mut BreakWindow,
) -> ScanResult {
    let len = buffer.unit_len();

    if from_index.saturating_add(1) >= len {
        return ScanResult {
            index: len,
            decision: None,
        };
    }

    window.reset(classify(buffer.decode_at(from_index)));

    for index in (from_index + 1)..len {
        if buffer.continues_previous_at(index) {
            continue;
        }

        let candidate = classify(buffer.decode_at(index));
        let decision = window.decide(candidate);

        if decision.is_break() {
            tracing::trace!(
                message = "boundary",
                from_index,
                index,
                %decision,
                anchor = %window.anchor(),
                middle_len = window.middle().len()
            );
            return ScanResult {
                index,
                decision: Some(decision),
            };
        }

        window.push_middle(candidate);
    }

    ScanResult {
        index: len,
        decision: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    fn utf16(text: &str) -> Vec<u16> { text.encode_utf16().collect() }

    /// Every boundary after 0, collected by calling [`next_boundary`] repeatedly.
    fn all_boundaries(units: &[u16]) -> Vec<usize> {
        let mut acc = vec![];
        let mut index = 0;
        while index < units.len() {
            index = next_boundary(units, index);
            acc.push(index);
        }
        acc
    }

    #[test]
    fn test_empty_and_single_unit() {
        let empty: &[u16] = &[];
        assert_eq2!(next_boundary(empty, 0), 0);
        assert_eq2!(next_boundary(&utf16("a")[..], 0), 1);
        assert_eq2!(next_boundary("a", 0), 1);
    }

    #[test]
    fn test_from_index_past_the_end_returns_len() {
        let units = utf16("abc");
        assert_eq2!(next_boundary(&units[..], 2), 3);
        assert_eq2!(next_boundary(&units[..], 3), 3);
        assert_eq2!(next_boundary(&units[..], 100), 3);
        assert_eq2!(next_boundary(&units[..], usize::MAX), 3);
    }

    #[test]
    fn test_ascii_breaks_after_every_unit() {
        assert_eq2!(all_boundaries(&utf16("abc")), vec![1, 2, 3]);
    }

    #[test]
    fn test_crlf_is_one_cluster() {
        assert_eq2!(all_boundaries(&utf16("a\r\nb")), vec![1, 3, 4]);
        assert_eq2!(all_boundaries(&utf16("\n\r")), vec![1, 2]);
    }

    #[test]
    fn test_surrogate_pair_is_not_double_counted() {
        // U+1F600 GRINNING FACE is a single supplementary plane code point.
        assert_eq2!(all_boundaries(&utf16("\u{1F600}")), vec![2]);
        assert_eq2!(all_boundaries(&utf16("\u{1F600}\u{1F600}")), vec![2, 4]);
    }

    #[test]
    fn test_flags_pair_up() {
        // JP flag.
        assert_eq2!(all_boundaries(&utf16("🇯🇵")), vec![4]);
        // Three indicators: a pair and a singleton.
        assert_eq2!(all_boundaries(&utf16("🇯🇵🇺")), vec![4, 6]);
        // Two flags.
        assert_eq2!(all_boundaries(&utf16("🇯🇵🇺🇸")), vec![4, 8]);
    }

    #[test]
    fn test_emoji_modifier_attaches_to_base() {
        assert_eq2!(all_boundaries(&utf16("\u{270A}\u{1F3FB}")), vec![3]);
        assert_eq2!(all_boundaries(&utf16("\u{270A}a")), vec![1, 2]);
    }

    #[test]
    fn test_scan_reports_decision() {
        let units = utf16("ab");
        assert_eq2!(
            scan_next_boundary(&units[..], 0),
            ScanResult {
                index: 1,
                decision: Some(BreakDecision::BreakAtStart)
            }
        );
        assert_eq2!(
            scan_next_boundary(&units[..], 1),
            ScanResult {
                index: 2,
                decision: None
            }
        );
    }

    #[test]
    fn test_scan_reports_regional_decision() {
        // A lone indicator after a non indicator ends the cluster before it.
        let units = utf16("a🇯🇵");
        let result = scan_next_boundary(&units[..], 0);
        assert_eq2!(result.index, 1);
        assert!(result.decision.is_some_and(BreakDecision::is_regional));

        // A completed pair followed by anything else.
        let result = scan_next_boundary(&units[..], 1);
        assert_eq2!(
            result,
            ScanResult {
                index: 5,
                decision: None
            }
        );
        let units = utf16("🇯🇵a");
        assert_eq2!(
            scan_next_boundary(&units[..], 0).decision,
            Some(BreakDecision::Break)
        );
    }

    #[test]
    fn test_utf8_boundaries_are_char_boundaries() {
        let text = "e\u{301}🇯🇵!";
        let first = next_boundary(text, 0);
        assert_eq2!(&text[..first], "e\u{301}");
        let second = next_boundary(text, first);
        assert_eq2!(&text[first..second], "🇯🇵");
        let third = next_boundary(text, second);
        assert_eq2!(&text[second..third], "!");
        assert_eq2!(third, text.len());
    }
}
