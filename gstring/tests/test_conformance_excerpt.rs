// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_gstring::{ConformanceReport, assert_eq2, run_conformance_file};

const EXCERPT: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/grapheme_break_test_excerpt.txt"
);

#[test]
fn test_excerpt_passes() {
    let report = run_conformance_file(EXCERPT).unwrap();
    assert_eq2!(
        report,
        ConformanceReport {
            passed: 17,
            failed: 0,
            failing_line_numbers: vec![],
        }
    );
}
