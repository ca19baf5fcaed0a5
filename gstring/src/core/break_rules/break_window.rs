// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

use super::{BreakDecision, decide};
use crate::GraphemeBreakProperty;

/// Most clusters are short, so the middle run rarely spills to the heap. Long runs of
/// combining marks (eg: "zalgo" text) do spill, which is fine.
pub const MIDDLE_INLINE_CAPACITY: usize = 16;

pub type MiddleRun = SmallVec<[GraphemeBreakProperty; MIDDLE_INLINE_CAPACITY]>;

/// The lookahead state of a scan: the `anchor` property where the current cluster
/// started, followed by the `middle` run of properties that were scanned past without
/// finding a boundary.
///
/// ```text
///  anchor   middle (append only)     candidate
/// ┌──────┬────────┬────────┬─────┐  ┌───────┐
/// │EBase │ Extend │ Extend │ ... │  │ E_Mod │  -> decide() -> BreakDecision
/// └──────┴────────┴────────┴─────┘  └───────┘
/// ```
///
/// `middle` only grows while the cluster grows. When a boundary is confirmed the
/// window is [`reset`](Self::reset) with the candidate as the new anchor, and `middle`
/// starts out empty again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakWindow {
    anchor: GraphemeBreakProperty,
    middle: MiddleRun,
}

impl BreakWindow {
    #[must_use]
    pub fn new(anchor: GraphemeBreakProperty) -> Self {
        Self {
            anchor,
            middle: MiddleRun::new(),
        }
    }

    #[must_use]
    pub fn anchor(&self) -> GraphemeBreakProperty { self.anchor }

    #[must_use]
    pub fn middle(&self) -> &[GraphemeBreakProperty] { &self.middle }

    /// Test whether there is a boundary before `candidate`. Does not change the window.
    #[must_use]
    pub fn decide(&self, candidate: GraphemeBreakProperty) -> BreakDecision {
        decide(self.anchor, &self.middle, candidate)
    }

    /// Record a candidate that joined the current cluster.
    pub fn push_middle(&mut self, property: GraphemeBreakProperty) {
        self.middle.push(property);
    }

    /// Start a new cluster at `anchor`. Keeps the middle run's allocation, if any.
    pub fn reset(&mut self, anchor: GraphemeBreakProperty) {
        self.anchor = anchor;
        self.middle.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GraphemeBreakProperty::{EBase, EModifier, Extend, Other},
                assert_eq2};

    #[test]
    fn test_window_grows_then_resets() {
        let mut window = BreakWindow::new(EBase);
        assert_eq2!(window.middle(), &[]);

        assert_eq2!(window.decide(Extend), BreakDecision::NotBreak);
        window.push_middle(Extend);
        assert_eq2!(window.decide(EModifier), BreakDecision::NotBreak);
        window.push_middle(EModifier);
        assert_eq2!(window.middle(), &[Extend, EModifier]);

        assert!(window.decide(Other).is_break());
        window.reset(Other);
        assert_eq2!(window.anchor(), Other);
        assert_eq2!(window.middle(), &[]);
    }

    #[test]
    fn test_long_middle_run_spills() {
        let mut window = BreakWindow::new(Other);
        for _ in 0..(MIDDLE_INLINE_CAPACITY * 4) {
            assert_eq2!(window.decide(Extend), BreakDecision::NotBreak);
            window.push_middle(Extend);
        }
        assert_eq2!(window.middle().len(), MIDDLE_INLINE_CAPACITY * 4);
        assert!(window.decide(Other).is_break());
    }
}
