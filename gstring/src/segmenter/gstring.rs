// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use super::{GraphemeClusters, boundaries, count_clusters, iterate_clusters};
use crate::{GStringError, GStringResult, ok};

/// An owned string that knows where its grapheme clusters are. The text is segmented
/// once in the constructor and the boundaries are cached, so [`GString::len`] and
/// [`GString::get`] don't rescan.
///
/// [`GString::len`] is the number of grapheme clusters, which is what a user would
/// count, and not the number of bytes.
///
/// ```
/// use r3bl_gstring::GString;
///
/// let it = GString::new("🇯🇵,e\u{301},,x");
/// assert_eq!(it.len(), 6);
/// assert_eq!(it.get(2), Some("e\u{301}"));
/// assert_eq!(
///     it.split(",", None).unwrap(),
///     vec!["🇯🇵", "e\u{301}", "", "x"]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GString {
    string: String,
    /// Exclusive end index of each cluster. The last one equals `string.len()`.
    ends: Vec<usize>,
}

impl GString {
    pub fn new(arg_string: impl Into<String>) -> Self {
        let string = arg_string.into();
        let ends = boundaries(string.as_str()).collect();
        Self { string, ends }
    }

    /// # Errors
    ///
    /// Returns [`GStringError::InvalidInput`] if `bytes` is not valid UTF-8.
    pub fn try_from_utf8(bytes: &[u8]) -> GStringResult<Self> {
        match std::str::from_utf8(bytes) {
            Ok(string) => ok!(Self::new(string)),
            Err(error) => GStringError::new_invalid_input(format!(
                "not UTF-8, {error}"
            )),
        }
    }

    /// # Errors
    ///
    /// Returns [`GStringError::InvalidInput`] if `units` contains an unpaired
    /// surrogate. Segment the `[u16]` directly (eg: with
    /// [`super::split_to_clusters`]) to handle those.
    pub fn try_from_utf16(units: &[u16]) -> GStringResult<Self> {
        match String::from_utf16(units) {
            Ok(string) => ok!(Self::new(string)),
            Err(error) => GStringError::new_invalid_input(format!(
                "not UTF-16, {error}"
            )),
        }
    }

    /// Number of grapheme clusters.
    #[must_use]
    pub fn len(&self) -> usize { self.ends.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.ends.is_empty() }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.string }

    /// The grapheme cluster at `cluster_index`, if any.
    #[must_use]
    pub fn get(&self, cluster_index: usize) -> Option<&str> {
        let end = *self.ends.get(cluster_index)?;
        let start = match cluster_index {
            0 => 0,
            it => self.ends[it - 1],
        };
        self.string.get(start..end)
    }

    pub fn iter(&self) -> GraphemeClusters<'_, str> { iterate_clusters(self.as_str()) }

    /// Split into parts at each cluster that equals `separator`. Matching happens per
    /// grapheme cluster, so a `","` separator never matches the inside of a cluster.
    ///
    /// - The separator itself is dropped.
    /// - An empty `separator` puts every cluster into its own part.
    /// - Consecutive separators produce empty parts in between. A trailing separator
    ///   does not produce an empty trailing part.
    /// - With `Some(limit)` at most `limit` parts are returned.
    ///
    /// # Errors
    ///
    /// Returns [`GStringError::InvalidInput`] if `separator` is more than one grapheme
    /// cluster, since it could never match a single cluster.
    pub fn split(
        &self,
        separator: &str,
        limit: Option<usize>,
    ) -> GStringResult<Vec<String>> {
        if count_clusters(separator) > 1 {
            return GStringError::new_invalid_input(format!(
                "separator {separator:?} is more than one grapheme cluster"
            ));
        }

        let limit = limit.unwrap_or(usize::MAX);
        let mut parts: Vec<String> = vec![];
        let mut part_index = 0;

        for cluster in self.iter() {
            if part_index >= limit {
                break;
            }
            let is_separator = cluster == separator;
            if !is_separator {
                if parts.len() <= part_index {
                    parts.resize_with(part_index + 1, String::new);
                }
                parts[part_index].push_str(cluster);
            }
            if is_separator || separator.is_empty() {
                part_index += 1;
            }
        }

        ok!(parts)
    }
}

impl Display for GString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.string)
    }
}

impl AsRef<str> for GString {
    fn as_ref(&self) -> &str { self.as_str() }
}

impl<'a> IntoIterator for &'a GString {
    type Item = &'a str;
    type IntoIter = GraphemeClusters<'a, str>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

mod conversions {
    use super::GString;

    impl From<&str> for GString {
        fn from(it: &str) -> Self { Self::new(it) }
    }

    impl From<String> for GString {
        fn from(it: String) -> Self { Self::new(it) }
    }

    impl From<GString> for String {
        fn from(it: GString) -> Self { it.string }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_len_counts_clusters_not_bytes() {
        let it = GString::new("🇯🇵🇺🇸");
        assert_eq2!(it.len(), 2);
        assert_eq2!(it.as_str().len(), 16);
        assert!(!it.is_empty());
        assert!(GString::default().is_empty());
        assert_eq2!(GString::from("").len(), 0);
    }

    #[test]
    fn test_get() {
        let it = GString::from("a\r\nb");
        assert_eq2!(it.get(0), Some("a"));
        assert_eq2!(it.get(1), Some("\r\n"));
        assert_eq2!(it.get(2), Some("b"));
        assert_eq2!(it.get(3), None);
    }

    #[test]
    fn test_iter_and_display() {
        let it = GString::from(String::from("x\u{270A}\u{1F3FB}"));
        let clusters: Vec<&str> = (&it).into_iter().collect();
        assert_eq2!(clusters, vec!["x", "\u{270A}\u{1F3FB}"]);
        assert_eq2!(it.to_string(), "x\u{270A}\u{1F3FB}");
        assert_eq2!(AsRef::<str>::as_ref(&it), "x\u{270A}\u{1F3FB}");
        assert_eq2!(String::from(it), "x\u{270A}\u{1F3FB}");
    }

    #[test]
    fn test_try_from_utf8_and_utf16() {
        let it = GString::try_from_utf8("e\u{301}".as_bytes()).unwrap();
        assert_eq2!(it.len(), 1);
        assert!(GString::try_from_utf8(&[0xFF, 0xFE]).is_err());

        let units: Vec<u16> = "🇯🇵".encode_utf16().collect();
        assert_eq2!(GString::try_from_utf16(&units).unwrap().len(), 1);
        let report = GString::try_from_utf16(&[0xD800]).unwrap_err();
        assert!(matches!(
            report.downcast_ref::<GStringError>(),
            Some(GStringError::InvalidInput { .. })
        ));
    }

    #[test_case("a,b,c", ",", None, &["a", "b", "c"] ; "simple")]
    #[test_case("a,,b", ",", None, &["a", "", "b"] ; "consecutive separators")]
    #[test_case(",a", ",", None, &["", "a"] ; "leading separator")]
    #[test_case("a,", ",", None, &["a"] ; "trailing separator")]
    #[test_case("abc", "", None, &["a", "b", "c"] ; "empty separator")]
    #[test_case("a,b,c", ",", Some(2), &["a", "b"] ; "limit")]
    #[test_case("a,b,c", ",", Some(0), &[] ; "limit zero")]
    #[test_case("abc", ",", None, &["abc"] ; "no separator")]
    #[test_case("", ",", None, &[] ; "empty")]
    #[test_case("🇯🇵🇺🇸🇯🇵", "🇺🇸", None, &["🇯🇵", "🇯🇵"] ; "flag separator")]
    #[test_case("e\u{301}ee", "e", None, &["e\u{301}"] ; "separator does not match inside a cluster")]
    fn test_split(text: &str, separator: &str, limit: Option<usize>, expected: &[&str]) {
        let it = GString::new(text);
        assert_eq2!(it.split(separator, limit).unwrap(), expected.to_vec());
    }

    #[test]
    fn test_split_rejects_multi_cluster_separator() {
        let it = GString::new("a, b");
        let report = it.split(", ", None).unwrap_err();
        assert!(matches!(
            report.downcast_ref::<GStringError>(),
            Some(GStringError::InvalidInput { .. })
        ));
    }
}
