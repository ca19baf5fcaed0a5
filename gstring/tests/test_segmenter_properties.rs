// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_gstring::{BoundaryScanner, assert_eq2, count_clusters, next_boundary,
                   split_to_clusters};

/// Mixed input that exercises every rule family.
const CORPUS: &[&str] = &[
    "",
    "a",
    "hello world",
    "a\r\nb\n\rc\r",
    "e\u{301}\u{302}\u{303}o\u{308}",
    "🇯🇵🇺🇸🇩",
    "\u{270A}\u{1F3FB}\u{270A}a",
    "👨\u{200D}👩\u{200D}👧\u{200D}👦!",
    "\u{1100}\u{1161}\u{11A8}\u{AC00}\u{AC01}\u{11A8}",
    "\u{0600}\u{0661}\u{0915}\u{0903}",
    "\u{1F600}\u{1F600}\u{1F3FB}",
];

fn utf16(text: &str) -> Vec<u16> { text.encode_utf16().collect() }

#[test]
fn test_concatenated_clusters_reproduce_the_input() {
    for text in CORPUS {
        assert_eq2!(split_to_clusters(*text).concat(), *text);

        let units = utf16(text);
        assert_eq2!(split_to_clusters(&units[..]).concat(), units);
    }
}

#[test]
fn test_count_matches_split() {
    for text in CORPUS {
        assert_eq2!(count_clusters(*text), split_to_clusters(*text).len());

        let units = utf16(text);
        assert_eq2!(count_clusters(&units[..]), split_to_clusters(&units[..]).len());
        // Same clusters, whatever the encoding.
        assert_eq2!(count_clusters(&units[..]), count_clusters(*text));
    }
}

#[test]
fn test_boundaries_strictly_increase_and_end_at_len() {
    for text in CORPUS {
        let units = utf16(text);
        let mut previous = 0;
        let mut index = 0;
        while index < units.len() {
            index = next_boundary(&units[..], index);
            assert!(index > previous || (index == 0 && units.is_empty()));
            previous = index;
        }
        assert_eq2!(index, units.len());

        let from_scanner: Vec<usize> = BoundaryScanner::new(*text).collect();
        assert_eq2!(from_scanner.last().copied().unwrap_or(0), text.len());
    }
}

#[test]
fn test_crlf_is_never_split() {
    for text in CORPUS {
        for cluster in split_to_clusters(*text) {
            assert!(!cluster.ends_with('\r') || cluster == "\r", "{cluster:?}");
        }
        let units = utf16(text);
        let ends: Vec<usize> = BoundaryScanner::new(&units[..]).collect();
        for (index, pair) in units.windows(2).enumerate() {
            if pair == [0x0D, 0x0A] {
                assert!(!ends.contains(&(index + 1)));
            }
        }
    }
}

#[test]
fn test_regional_indicator_pairing() {
    assert_eq2!(count_clusters("\u{1F1EF}\u{1F1F5}"), 1);
    assert_eq2!(count_clusters("\u{1F1EF}\u{1F1F5}\u{1F1FA}"), 2);
    assert_eq2!(
        split_to_clusters("\u{1F1EF}\u{1F1F5}\u{1F1FA}"),
        vec!["\u{1F1EF}\u{1F1F5}", "\u{1F1FA}"]
    );
}

#[test]
fn test_emoji_modifier_attachment() {
    assert_eq2!(count_clusters("\u{270A}\u{1F3FB}"), 1);
    assert_eq2!(count_clusters("\u{270A}a"), 2);
    // Extend between the base and the modifier.
    assert_eq2!(count_clusters("\u{270A}\u{0301}\u{1F3FB}"), 1);
}

#[test]
fn test_combining_marks_attach_to_base() {
    let mut text = String::from("a");
    for _ in 0..50 {
        text.push('\u{0301}');
        assert_eq2!(count_clusters(text.as_str()), 1);
    }
}

#[test]
fn test_surrogate_pair_is_one_cluster_of_two_units() {
    let units = utf16("\u{1F600}");
    assert_eq2!(units.len(), 2);
    let clusters = split_to_clusters(&units[..]);
    assert_eq2!(clusters.len(), 1);
    assert_eq2!(clusters[0].len(), 2);
    assert_eq2!(count_clusters(&units[..]), 1);
}

#[test]
fn test_unpaired_surrogates_do_not_panic() {
    // Lone high, lone low, reversed pair.
    let units: Vec<u16> = vec![0x61, 0xD800, 0x62, 0xDC00, 0xDC00, 0xD800];
    let clusters = split_to_clusters(&units[..]);
    assert_eq2!(clusters.concat(), units);
    // Lone surrogates are `Control`, so each one stands alone.
    assert_eq2!(clusters.len(), 6);
}

#[test]
fn test_empty_input() {
    assert!(split_to_clusters("").is_empty());
    assert_eq2!(count_clusters(""), 0);
    let empty: &[u16] = &[];
    assert!(split_to_clusters(empty).is_empty());
}
