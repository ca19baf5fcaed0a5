// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{GraphemeClusters, GraphemeIterable, count_clusters, iterate_clusters,
            split_to_clusters};
use crate::TextBuffer;

/// Method syntax for the free functions in this module. Implemented for every
/// [`TextBuffer`], so `&str`, `&String` and `&[u16]` / `Vec<u16>` (via deref) all get
/// these methods.
///
/// ```
/// use r3bl_gstring::GraphemeExt;
///
/// let text = String::from("ñ🇯🇵");
/// assert_eq!(text.count_clusters(), 2);
/// assert_eq!(text.split_to_clusters(), vec!["ñ", "🇯🇵"]);
/// ```
pub trait GraphemeExt: TextBuffer {
    fn split_to_clusters(&self) -> Vec<&Self> { split_to_clusters(self) }

    fn iter_clusters(&self) -> GraphemeClusters<'_, Self> { iterate_clusters(self) }

    fn count_clusters(&self) -> usize { count_clusters(self) }

    fn graphemes_iterable(&self) -> GraphemeIterable<'_, Self> {
        GraphemeIterable::new(self)
    }
}

impl<T: TextBuffer + ?Sized> GraphemeExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_methods_on_str_and_utf16() {
        let text = "g\u{308}o";
        assert_eq2!(text.count_clusters(), 2);
        assert_eq2!(text.iter_clusters().next(), Some("g\u{308}"));

        let units: Vec<u16> = text.encode_utf16().collect();
        assert_eq2!(units.count_clusters(), 2);
        assert_eq2!(units.split_to_clusters(), vec![&units[0..2], &units[2..3]]);
        assert_eq2!(units.graphemes_iterable().iter().count(), 2);
    }
}
