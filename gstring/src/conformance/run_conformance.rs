// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          path::Path};

use super::parse_test_line;
use crate::{GStringError, GStringResult, ok};

/// Outcome of running every case in a `GraphemeBreakTest.txt` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConformanceReport {
    pub passed: usize,
    pub failed: usize,
    /// 1 based line numbers of the failing cases.
    pub failing_line_numbers: Vec<usize>,
}

impl ConformanceReport {
    #[must_use]
    pub fn total(&self) -> usize { self.passed + self.failed }

    #[must_use]
    pub fn is_success(&self) -> bool { self.failed == 0 }
}

impl Display for ConformanceReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{passed}/{total} passed, {failed} failed",
            passed = self.passed,
            total = self.total(),
            failed = self.failed
        )?;
        if !self.failing_line_numbers.is_empty() {
            write!(f, " (lines: {:?})", self.failing_line_numbers)?;
        }
        Ok(())
    }
}

/// Run every test case in `text`, which is the contents of a `GraphemeBreakTest.txt`
/// file. Each failure is logged with [`tracing::debug!`].
///
/// # Errors
///
/// Returns [`GStringError::MalformedConformanceLine`] for the first line that can't
/// be parsed.
pub fn run_conformance(text: &str) -> GStringResult<ConformanceReport> {
    let mut report = ConformanceReport::default();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let Some(case) = parse_test_line(line_number, line)? else {
            continue;
        };

        let expected = case.expected_boundaries_utf16();
        let actual = case.actual_boundaries_utf16();
        if expected == actual {
            report.passed += 1;
        } else {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "conformance case failed",
                line_number,
                code_points = ?case.code_points,
                ?expected,
                ?actual
            );
            report.failed += 1;
            report.failing_line_numbers.push(line_number);
        }
    }

    ok!(report)
}

/// Read the file at `path` and pass its contents to [`run_conformance`].
///
/// # Errors
///
/// Returns [`GStringError::CouldNotReadFile`] if the file can't be read, and the
/// errors of [`run_conformance`] otherwise.
pub fn run_conformance_file(path: impl AsRef<Path>) -> GStringResult<ConformanceReport> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| {
        GStringError::CouldNotReadFile {
            path: path.display().to_string(),
            source,
        }
    })?;
    run_conformance(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    const SAMPLE: &str = "\
# GraphemeBreakTest-10.0.0.txt (excerpt)

÷ 0020 ÷ 0020 ÷\t#  ÷ [0.2] SPACE (Other) ÷ [999.0] SPACE (Other) ÷ [0.3]
÷ 000D × 000A ÷\t#  ÷ [0.2] <CARRIAGE RETURN (CR)> (CR) × [3.0] <LINE FEED (LF)> (LF) ÷ [0.3]
÷ 0061 × 0308 ÷ 0062 ÷
÷ 1F1E6 × 1F1E7 ÷ 1F1E8 ÷
÷ 261D × 1F3FB ÷
";

    #[test]
    fn test_all_pass() {
        let report = run_conformance(SAMPLE).unwrap();
        assert_eq2!(
            report,
            ConformanceReport {
                passed: 5,
                failed: 0,
                failing_line_numbers: vec![],
            }
        );
        assert!(report.is_success());
        assert_eq2!(report.to_string(), "5/5 passed, 0 failed");
    }

    #[test]
    fn test_failures_are_reported_with_line_numbers() {
        // Line 2 claims a boundary inside CRLF.
        let text = "÷ 0041 ÷\n÷ 000D ÷ 000A ÷\n";
        let report = run_conformance(text).unwrap();
        assert_eq2!(report.passed, 1);
        assert_eq2!(report.failed, 1);
        assert_eq2!(report.failing_line_numbers, vec![2]);
        assert!(!report.is_success());
        assert_eq2!(report.to_string(), "1/2 passed, 1 failed (lines: [2])");
    }

    #[test]
    fn test_malformed_line_is_an_error() {
        let text = "÷ 0041 ÷\n÷ 0041\n";
        let report = run_conformance(text).unwrap_err();
        assert!(matches!(
            report.downcast_ref::<GStringError>(),
            Some(GStringError::MalformedConformanceLine { line_number: 2, .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let report = run_conformance_file("/does/not/exist/GraphemeBreakTest.txt")
            .unwrap_err();
        assert!(matches!(
            report.downcast_ref::<GStringError>(),
            Some(GStringError::CouldNotReadFile { .. })
        ));
    }
}
