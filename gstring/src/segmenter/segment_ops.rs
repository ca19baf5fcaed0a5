// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{ClusterRanges, GraphemeClusters};
use crate::{BoundaryScanner, TextBuffer};

/// Split `text` into its grapheme clusters. Joining the result gives back `text`.
///
/// ```
/// use r3bl_gstring::split_to_clusters;
///
/// assert_eq!(split_to_clusters("a\r\nb"), vec!["a", "\r\n", "b"]);
/// assert!(split_to_clusters("").is_empty());
/// ```
#[must_use]
pub fn split_to_clusters<T: TextBuffer + ?Sized>(text: &T) -> Vec<&T> {
    iterate_clusters(text).collect()
}

/// Lazy version of [`split_to_clusters`].
#[must_use]
pub fn iterate_clusters<T: TextBuffer + ?Sized>(text: &T) -> GraphemeClusters<'_, T> {
    GraphemeClusters::new(text)
}

/// Number of grapheme clusters in `text`. Walks the boundaries without collecting
/// anything.
#[must_use]
pub fn count_clusters<T: TextBuffer + ?Sized>(text: &T) -> usize {
    boundaries(text).count()
}

/// The exclusive end index of every cluster in `text`.
#[must_use]
pub fn boundaries<T: TextBuffer + ?Sized>(text: &T) -> BoundaryScanner<'_, T> {
    BoundaryScanner::new(text)
}

/// The code unit range of every cluster in `text`.
#[must_use]
pub fn cluster_ranges<T: TextBuffer + ?Sized>(text: &T) -> ClusterRanges<'_, T> {
    ClusterRanges::new(text)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case("", &[] ; "empty")]
    #[test_case("a", &["a"] ; "single unit")]
    #[test_case("abc", &["a", "b", "c"] ; "ascii")]
    #[test_case("a\r\nb", &["a", "\r\n", "b"] ; "crlf")]
    #[test_case("\r\r\n\n", &["\r", "\r\n", "\n"] ; "cr crlf lf")]
    #[test_case("e\u{301}\u{302}\u{303}", &["e\u{301}\u{302}\u{303}"] ; "stacked marks")]
    #[test_case("🇯🇵", &["🇯🇵"] ; "one flag")]
    #[test_case("🇯🇵🇺", &["🇯🇵", "🇺"] ; "flag and a lone indicator")]
    #[test_case("🇯🇵🇺🇸", &["🇯🇵", "🇺🇸"] ; "two flags")]
    #[test_case("\u{270A}\u{1F3FB}", &["\u{270A}\u{1F3FB}"] ; "raised fist light skin")]
    #[test_case("\u{270A}a", &["\u{270A}", "a"] ; "raised fist then letter")]
    #[test_case("👨\u{200D}👩\u{200D}👧", &["👨\u{200D}👩\u{200D}👧"] ; "zwj family")]
    #[test_case("\u{1100}\u{1161}\u{11A8}", &["\u{1100}\u{1161}\u{11A8}"] ; "hangul jamo")]
    #[test_case("\u{AC00}\u{11A8}x", &["\u{AC00}\u{11A8}", "x"] ; "hangul lv t")]
    #[test_case("\u{0600}1", &["\u{0600}1"] ; "prepend")]
    #[test_case("\u{0915}\u{0903}", &["\u{0915}\u{0903}"] ; "spacing mark")]
    fn test_split_to_clusters(text: &str, expected: &[&str]) {
        assert_eq2!(split_to_clusters(text), expected.to_vec());
        assert_eq2!(count_clusters(text), expected.len());
    }

    #[test]
    fn test_split_utf16() {
        let units: Vec<u16> = "x\u{1F600}".encode_utf16().collect();
        let clusters = split_to_clusters(&units[..]);
        assert_eq2!(clusters, vec![&units[0..1], &units[1..3]]);
    }

    #[test]
    fn test_boundaries_and_ranges() {
        let text = "a\r\nb";
        assert_eq2!(boundaries(text).collect::<Vec<_>>(), vec![1, 3, 4]);
        assert_eq2!(cluster_ranges(text).collect::<Vec<_>>(), vec![0..1, 1..3, 3..4]);
    }

    #[test]
    fn test_iterate_is_lazy_and_fresh() {
        let text = "xyz";
        let mut first = iterate_clusters(text);
        assert_eq2!(first.next(), Some("x"));
        let second: Vec<&str> = iterate_clusters(text).collect();
        assert_eq2!(second, vec!["x", "y", "z"]);
        assert_eq2!(first.collect::<Vec<_>>(), vec!["y", "z"]);
    }
}
