// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CodePoint, boundaries};

/// One parsed line of `GraphemeBreakTest.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConformanceCase {
    pub code_points: Vec<CodePoint>,
    /// Exclusive end of each expected cluster, as an index into `code_points`. The
    /// leading `÷` (index 0) is not included, so the last entry is always
    /// `code_points.len()`.
    pub expected_boundaries: Vec<usize>,
}

impl ConformanceCase {
    /// Encode the code points as UTF-16. Surrogate code points, which the data file
    /// uses to test unpaired surrogates, are written out as a single raw unit.
    #[must_use]
    pub fn to_utf16(&self) -> Vec<u16> {
        let mut acc = Vec::with_capacity(self.code_points.len() * 2);
        for code_point in &self.code_points {
            push_utf16(&mut acc, *code_point);
        }
        acc
    }

    /// Same as `expected_boundaries`, but as UTF-16 code unit indices.
    #[must_use]
    pub fn expected_boundaries_utf16(&self) -> Vec<usize> {
        let mut unit_ends = Vec::with_capacity(self.code_points.len());
        let mut units = 0;
        for code_point in &self.code_points {
            units += utf16_len(*code_point);
            unit_ends.push(units);
        }
        self.expected_boundaries
            .iter()
            .filter_map(|&end| end.checked_sub(1).and_then(|it| unit_ends.get(it)))
            .copied()
            .collect()
    }

    /// The expected clusters, each as UTF-16 code units.
    #[must_use]
    pub fn expected_clusters_utf16(&self) -> Vec<Vec<u16>> {
        let units = self.to_utf16();
        let mut start = 0;
        self.expected_boundaries_utf16()
            .into_iter()
            .map(|end| {
                let cluster = units[start..end].to_vec();
                start = end;
                cluster
            })
            .collect()
    }

    /// What the segmenter actually produces for this case.
    #[must_use]
    pub fn actual_boundaries_utf16(&self) -> Vec<usize> {
        let units = self.to_utf16();
        boundaries(&units[..]).collect()
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.actual_boundaries_utf16() == self.expected_boundaries_utf16()
    }
}

fn utf16_len(code_point: CodePoint) -> usize {
    if code_point.as_u32() > 0xFFFF { 2 } else { 1 }
}

fn push_utf16(acc: &mut Vec<u16>, code_point: CodePoint) {
    match code_point.as_char() {
        Some(it) => {
            let mut buffer = [0_u16; 2];
            acc.extend_from_slice(it.encode_utf16(&mut buffer));
        }
        // Lone surrogate. Always fits, since surrogates are below 0x10000.
        None => acc.extend(u16::try_from(code_point.as_u32()).ok()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, code_point};

    fn case(code_points: &[u32], expected_boundaries: &[usize]) -> ConformanceCase {
        ConformanceCase {
            code_points: code_points.iter().copied().map(code_point).collect(),
            expected_boundaries: expected_boundaries.to_vec(),
        }
    }

    #[test]
    fn test_utf16_boundaries_account_for_surrogate_pairs() {
        // RI RI (one flag, 4 units), then SPACE.
        let it = case(&[0x1_F1EF, 0x1_F1F5, 0x0020], &[2, 3]);
        assert_eq2!(it.to_utf16().len(), 5);
        assert_eq2!(it.expected_boundaries_utf16(), vec![4, 5]);
        assert_eq2!(it.actual_boundaries_utf16(), vec![4, 5]);
        assert_eq2!(it.expected_clusters_utf16().len(), 2);
        assert!(it.is_pass());
    }

    #[test]
    fn test_lone_surrogate_is_one_unit() {
        let it = case(&[0x0020, 0xD800], &[1, 2]);
        assert_eq2!(it.to_utf16(), vec![0x0020, 0xD800]);
        assert!(it.is_pass());
    }

    #[test]
    fn test_wrong_expectation_fails() {
        let it = case(&[0x0061, 0x0301], &[1, 2]);
        assert_eq2!(it.actual_boundaries_utf16(), vec![2]);
        assert!(!it.is_pass());
    }
}
