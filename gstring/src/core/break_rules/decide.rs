// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::BreakDecision::{self, Break, BreakAtStart, BreakConsumingLastRegional,
                           BreakConsumingPenultimateRegional, NotBreak};
use crate::GraphemeBreakProperty::{self, CR, EBase, EBaseGAZ, EModifier, Extend,
                                   GlueAfterZwj, L, LF, LV, LVT, Prepend,
                                   RegionalIndicator, SpacingMark, T, V, ZWJ};

/// Decide whether there is a grapheme cluster boundary immediately before `candidate`.
///
/// - `anchor`: the property of the first code point of the current cluster.
/// - `middle`: the properties scanned past since `anchor`, none of which started a new
///   cluster.
/// - `candidate`: the property of the code point being tested.
///
/// The rules are tried in order and the first match wins. Two lookahead terminators
/// run first, to stop the window from growing once no emoji modifier or flag pair can
/// complete any more. Then the pairwise rules run on `previous` (the last scanned
/// property) and `candidate`.
#[must_use]
pub fn decide(
    anchor: GraphemeBreakProperty,
    middle: &[GraphemeBreakProperty],
    candidate: GraphemeBreakProperty,
) -> BreakDecision {
    let all = WindowProps {
        anchor,
        middle,
        candidate,
    };
    let previous = all.previous();
    let next = candidate;

    // Lookahead terminator for GB10: an emoji modifier that was reached over nothing
    // but `Extend`s, with no emoji base in the anchor.
    if let Some(modifier_index) = all.last_index_of(EModifier) {
        if modifier_index > 1
            && all.all_in_range(1..modifier_index, Extend)
            && !matches!(anchor, Extend | EBase | EBaseGAZ)
        {
            return Break;
        }
    }

    // Lookahead terminator for GB12 / GB13: the regional indicator run is over. Its
    // parity decides which indicator ends the flag.
    if let Some(regional_index) = all.last_index_of(RegionalIndicator) {
        if regional_index > 0
            && all.all_in_range(1..regional_index, RegionalIndicator)
            && !matches!(previous, Prepend | RegionalIndicator)
        {
            return if all.count_of(RegionalIndicator) % 2 == 1 {
                BreakConsumingLastRegional
            } else {
                BreakConsumingPenultimateRegional
            };
        }
    }

    // GB3. CR × LF
    if previous == CR && next == LF {
        return NotBreak;
    }

    // GB4. (Control | CR | LF) ÷
    if previous.is_control_like() {
        return if next == EModifier && middle.iter().all(|&it| it == Extend) {
            Break
        } else {
            BreakAtStart
        };
    }

    // GB5. ÷ (Control | CR | LF)
    if next.is_control_like() {
        return BreakAtStart;
    }

    // GB6. L × (L | V | LV | LVT)
    if previous == L && matches!(next, L | V | LV | LVT) {
        return NotBreak;
    }

    // GB7. (LV | V) × (V | T)
    if matches!(previous, LV | V) && matches!(next, V | T) {
        return NotBreak;
    }

    // GB8. (LVT | T) × T
    if matches!(previous, LVT | T) && next == T {
        return NotBreak;
    }

    // GB9. × (Extend | ZWJ)
    if matches!(next, Extend | ZWJ) {
        return NotBreak;
    }

    // GB9a. × SpacingMark
    if next == SpacingMark {
        return NotBreak;
    }

    // GB9b. Prepend ×
    if previous == Prepend {
        return NotBreak;
    }

    // GB10. (E_Base | E_Base_GAZ) Extend* × E_Modifier
    if next == EModifier {
        let base = all.last_index_before_candidate_not(Extend);
        if base.is_some_and(|index| all.get(index).is_emoji_base()) {
            return NotBreak;
        }
    }

    // GB11. ZWJ × (Glue_After_Zwj | E_Base_GAZ)
    if previous == ZWJ && matches!(next, GlueAfterZwj | EBaseGAZ) {
        return NotBreak;
    }

    // GB12 / GB13. A flag pair already closed inside the window.
    if middle.contains(&RegionalIndicator) {
        return Break;
    }

    // GB12 / GB13. RI × RI
    if previous == RegionalIndicator && next == RegionalIndicator {
        return NotBreak;
    }

    // GB999. Any ÷ Any
    BreakAtStart
}

/// Read only view of `[anchor] + middle + [candidate]` that doesn't allocate.
struct WindowProps<'a> {
    anchor: GraphemeBreakProperty,
    middle: &'a [GraphemeBreakProperty],
    candidate: GraphemeBreakProperty,
}

impl WindowProps<'_> {
    fn len(&self) -> usize { self.middle.len() + 2 }

    fn get(&self, index: usize) -> GraphemeBreakProperty {
        match index {
            0 => self.anchor,
            it if it == self.len() - 1 => self.candidate,
            it => self.middle[it - 1],
        }
    }

    /// The property right before the candidate.
    fn previous(&self) -> GraphemeBreakProperty { self.get(self.len() - 2) }

    fn last_index_of(&self, property: GraphemeBreakProperty) -> Option<usize> {
        (0..self.len()).rev().find(|&it| self.get(it) == property)
    }

    /// Ignores the candidate.
    fn last_index_before_candidate_not(
        &self,
        property: GraphemeBreakProperty,
    ) -> Option<usize> {
        (0..self.len() - 1).rev().find(|&it| self.get(it) != property)
    }

    fn all_in_range(
        &self,
        mut range: std::ops::Range<usize>,
        property: GraphemeBreakProperty,
    ) -> bool {
        range.all(|it| self.get(it) == property)
    }

    fn count_of(&self, property: GraphemeBreakProperty) -> usize {
        (0..self.len()).filter(|&it| self.get(it) == property).count()
    }
}
