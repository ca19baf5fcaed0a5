// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Compare against `unicode-segmentation`, which tracks a newer Unicode version. Only
//! inputs whose rules didn't change since Unicode 10.0.0 are compared: ASCII, Latin
//! with combining marks, Hangul, and line endings. Emoji and flags are not, since the
//! emoji rules were rewritten in Unicode 11.0.0.

use r3bl_gstring::{assert_eq2, split_to_clusters};
use test_case::test_case;
use unicode_segmentation::UnicodeSegmentation;

fn assert_same_as_unicode_segmentation(text: &str) {
    let expected: Vec<&str> = text.graphemes(true).collect();
    assert_eq2!(split_to_clusters(text), expected);

    let units: Vec<u16> = text.encode_utf16().collect();
    let expected_utf16: Vec<Vec<u16>> =
        expected.iter().map(|it| it.encode_utf16().collect()).collect();
    let actual_utf16: Vec<Vec<u16>> = split_to_clusters(&units[..])
        .into_iter()
        .map(<[u16]>::to_vec)
        .collect();
    assert_eq2!(actual_utf16, expected_utf16);
}

#[test_case("The quick brown fox jumps over the lazy dog." ; "ascii sentence")]
#[test_case("tabs\tand\x07bells\x00" ; "ascii controls")]
#[test_case("line one\r\nline two\nline three\r\r\n" ; "line endings")]
#[test_case("Cre\u{300}me bru\u{302}le\u{301}e" ; "latin combining marks")]
#[test_case("a\u{301}\u{302}\u{303}\u{304}\u{305}\u{306}\u{307}" ; "stacked marks")]
#[test_case("\u{301}leading mark" ; "leading mark")]
#[test_case("한국어 텍스트" ; "hangul syllables")]
#[test_case("\u{1100}\u{1161}\u{11A8}\u{1100}\u{1100}\u{1161}" ; "hangul jamo")]
#[test_case("\u{AC00}\u{11A8}\u{AC01}\u{11A8}\u{1161}" ; "hangul lv lvt with trailing jamo")]
#[test_case("\u{0915}\u{093F}\u{0915}\u{0903}" ; "devanagari spacing marks")]
fn test_matches_unicode_segmentation(text: &str) { assert_same_as_unicode_segmentation(text); }

#[test]
fn test_every_latin1_letter_with_every_combining_mark() {
    let mut text = String::new();
    for base in ('A'..='Z').chain('a'..='z').chain('\u{C0}'..='\u{FF}') {
        text.push(base);
        for mark in '\u{300}'..='\u{36F}' {
            text.push(mark);
        }
        text.push('\n');
    }
    assert_same_as_unicode_segmentation(&text);
}
