// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// The `Grapheme_Cluster_Break` property values used by the break rules.
///
/// The [`Display`] and [`std::str::FromStr`] representations use the short names from
/// the Unicode data files (eg: `Regional_Indicator`, `E_Base_GAZ`), so they can be
/// round tripped through `GraphemeBreakProperty.txt` and test file comments.
///
/// Code points that are not listed in the data file are [`GraphemeBreakProperty::Other`].
#[allow(clippy::upper_case_acronyms)]
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
pub enum GraphemeBreakProperty {
    CR,
    LF,
    Control,
    Extend,
    #[strum(serialize = "Regional_Indicator")]
    RegionalIndicator,
    SpacingMark,
    L,
    V,
    T,
    LV,
    LVT,
    #[default]
    Other,
    Prepend,
    #[strum(serialize = "E_Base")]
    EBase,
    #[strum(serialize = "E_Modifier")]
    EModifier,
    ZWJ,
    #[strum(serialize = "Glue_After_Zwj")]
    GlueAfterZwj,
    #[strum(serialize = "E_Base_GAZ")]
    EBaseGAZ,
}

impl GraphemeBreakProperty {
    /// `CR`, `LF`, and `Control` always break on both sides (except `CR LF`).
    #[must_use]
    pub fn is_control_like(self) -> bool {
        matches!(self, Self::CR | Self::LF | Self::Control)
    }

    /// The bases that an emoji modifier can attach to.
    #[must_use]
    pub fn is_emoji_base(self) -> bool { matches!(self, Self::EBase | Self::EBaseGAZ) }
}
