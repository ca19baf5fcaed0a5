// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          ops::Range};

use smallvec::SmallVec;
use unicode_width::UnicodeWidthStr;

use crate::{GraphemeBreakProperty, TextBuffer, classify, cluster_ranges, code_point};

/// Most clusters are one or two code points.
pub type PropertyList = SmallVec<[GraphemeBreakProperty; 4]>;

/// One row of the `split` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterInfo {
    pub index: usize,
    /// Code unit range in the scanned buffer.
    pub range: Range<usize>,
    pub text: String,
    /// Display width in terminal columns.
    pub width: usize,
    /// Break property of each code point in the cluster.
    pub properties: PropertyList,
}

impl ClusterInfo {
    #[must_use]
    pub fn new(index: usize, range: Range<usize>, text: String) -> Self {
        let width = text.width();
        let properties = text.chars().map(|it| classify(code_point(it))).collect();
        Self {
            index,
            range,
            text,
            width,
            properties,
        }
    }
}

/// Describe every cluster in `buffer`. `to_text` turns a cluster slice into printable
/// text.
pub fn describe_clusters<T: TextBuffer + ?Sized>(
    buffer: &T,
    to_text: impl Fn(&T) -> String,
) -> Vec<ClusterInfo> {
    cluster_ranges(buffer)
        .enumerate()
        .map(|(index, range)| {
            let text = to_text(buffer.slice(range.start, range.end));
            ClusterInfo::new(index, range, text)
        })
        .collect()
}

/// Formats as tab separated columns: index, range, width, quoted text, properties.
impl Display for ClusterInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let properties = self
            .properties
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" + ");
        write!(
            f,
            "{index}\t{start}..{end}\t{width}\t{text:?}\t{properties}",
            index = self.index,
            start = self.range.start,
            end = self.range.end,
            width = self.width,
            text = self.text,
        )
    }
}
