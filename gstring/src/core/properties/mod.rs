// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Every code point has exactly one [`GraphemeBreakProperty`]. The mapping comes from
//! the Unicode 10.0.0 `GraphemeBreakProperty.txt` data file, and is stored as a sorted
//! table of code point ranges in [`mod@property_table`].
//!
//! The table is static, process wide, and never mutated, so [`classify`] is a pure
//! function that is safe to call from any thread.

// Attach sources.
pub mod classify;
pub mod grapheme_break_property;
pub mod property_table;

// Re-export.
pub use classify::*;
pub use grapheme_break_property::*;
pub use property_table::*;
