// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{iter::FusedIterator, ops::Range};

use crate::{BoundaryScanner, TextBuffer};

/// Lazily yields the code unit range of each grapheme cluster, in order. The ranges
/// are contiguous, non empty, and together cover the whole buffer.
#[derive(Debug)]
pub struct ClusterRanges<'a, T: TextBuffer + ?Sized> {
    scanner: BoundaryScanner<'a, T>,
    start: usize,
}

impl<'a, T: TextBuffer + ?Sized> ClusterRanges<'a, T> {
    #[must_use]
    pub fn new(buffer: &'a T) -> Self {
        Self {
            scanner: BoundaryScanner::new(buffer),
            start: 0,
        }
    }
}

impl<T: TextBuffer + ?Sized> Iterator for ClusterRanges<'_, T> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.scanner.next()?;
        let range = self.start..end;
        self.start = end;
        Some(range)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.scanner.size_hint() }
}

impl<T: TextBuffer + ?Sized> FusedIterator for ClusterRanges<'_, T> {}

/// Lazily yields each grapheme cluster as a slice of the buffer. Returned by
/// [`super::iterate_clusters`].
///
/// This is a one shot iterator. To walk the same text more than once use
/// [`GraphemeIterable`], or call [`super::iterate_clusters`] again.
#[derive(Debug)]
pub struct GraphemeClusters<'a, T: TextBuffer + ?Sized> {
    buffer: &'a T,
    ranges: ClusterRanges<'a, T>,
}

impl<'a, T: TextBuffer + ?Sized> GraphemeClusters<'a, T> {
    #[must_use]
    pub fn new(buffer: &'a T) -> Self {
        Self {
            buffer,
            ranges: ClusterRanges::new(buffer),
        }
    }
}

impl<'a, T: TextBuffer + ?Sized> Iterator for GraphemeClusters<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let range = self.ranges.next()?;
        Some(self.buffer.slice(range.start, range.end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.ranges.size_hint() }
}

impl<T: TextBuffer + ?Sized> FusedIterator for GraphemeClusters<'_, T> {}

/// A restartable view over the grapheme clusters of a buffer. Every call to
/// [`Self::iter`] (or every `for` loop over `&iterable`) starts again from the
/// beginning.
///
/// ```
/// use r3bl_gstring::GraphemeIterable;
///
/// let iterable = GraphemeIterable::new("🇯🇵x");
/// assert_eq!(iterable.iter().count(), 2);
/// for (index, cluster) in (&iterable).into_iter().enumerate() {
///     assert_eq!(cluster, ["🇯🇵", "x"][index]);
/// }
/// assert_eq!(iterable.iter().last(), Some("x"));
/// ```
#[derive(Debug)]
pub struct GraphemeIterable<'a, T: TextBuffer + ?Sized> {
    buffer: &'a T,
}

impl<'a, T: TextBuffer + ?Sized> GraphemeIterable<'a, T> {
    #[must_use]
    pub fn new(buffer: &'a T) -> Self { Self { buffer } }

    #[must_use]
    pub fn buffer(&self) -> &'a T { self.buffer }

    #[must_use]
    pub fn iter(&self) -> GraphemeClusters<'a, T> { GraphemeClusters::new(self.buffer) }
}

// Only holds a shared reference, so no `T: Clone` bound is needed.
impl<T: TextBuffer + ?Sized> Clone for GraphemeIterable<'_, T> {
    fn clone(&self) -> Self { *self }
}

impl<T: TextBuffer + ?Sized> Copy for GraphemeIterable<'_, T> {}

impl<'a, T: TextBuffer + ?Sized> IntoIterator for &GraphemeIterable<'a, T> {
    type Item = &'a T;
    type IntoIter = GraphemeClusters<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T: TextBuffer + ?Sized> IntoIterator for GraphemeIterable<'a, T> {
    type Item = &'a T;
    type IntoIter = GraphemeClusters<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}
