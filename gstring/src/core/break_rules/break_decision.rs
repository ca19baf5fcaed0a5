// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::Display;

/// Outcome of testing one candidate against a [`super::BreakWindow`].
///
/// The scanner only cares about [`Self::is_break`]. The variants that do break record
/// which rule produced the boundary, so diagnostics and tests can tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum BreakDecision {
    /// No boundary before the candidate. It joins the current cluster.
    NotBreak,
    /// A boundary forced by a lookahead terminator or by a flag pair that was already
    /// completed inside the window.
    Break,
    /// An ordinary boundary (`GB4`, `GB5`, `GB999`).
    BreakAtStart,
    /// The window holds an odd number of regional indicators, so the last one is
    /// unpaired and the boundary falls after it.
    BreakConsumingLastRegional,
    /// The window holds an even number of regional indicators. They paired up, and the
    /// boundary falls after the pair.
    BreakConsumingPenultimateRegional,
}

impl BreakDecision {
    #[must_use]
    pub fn is_break(self) -> bool { !matches!(self, Self::NotBreak) }

    /// `true` for the two variants produced by the regional indicator terminator.
    #[must_use]
    pub fn is_regional(self) -> bool {
        matches!(
            self,
            Self::BreakConsumingLastRegional | Self::BreakConsumingPenultimateRegional
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_break() {
        assert!(!BreakDecision::NotBreak.is_break());
        assert!(BreakDecision::Break.is_break());
        assert!(BreakDecision::BreakAtStart.is_break());
        assert!(BreakDecision::BreakConsumingLastRegional.is_break());
        assert!(BreakDecision::BreakConsumingPenultimateRegional.is_break());
    }

    #[test]
    fn test_is_regional() {
        assert!(BreakDecision::BreakConsumingLastRegional.is_regional());
        assert!(BreakDecision::BreakConsumingPenultimateRegional.is_regional());
        assert!(!BreakDecision::Break.is_regional());
        assert!(!BreakDecision::NotBreak.is_regional());
    }
}
