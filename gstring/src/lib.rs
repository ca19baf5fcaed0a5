// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Grapheme cluster segmentation
//!
//! A grapheme cluster is what a user perceives as a single character. It may be made
//! up of many code points, and each code point may take one or two UTF-16 code units
//! (or one to four UTF-8 bytes). Some examples:
//!
//! | Text  | Code points            | Grapheme clusters |
//! | ----- | ---------------------- | ----------------- |
//! | `H`   | `U+0048`               | 1                 |
//! | `é`   | `U+0065 U+0301`        | 1                 |
//! | `🇯🇵`  | `U+1F1EF U+1F1F5`      | 1                 |
//! | `✊🏻`  | `U+270A U+1F3FB`       | 1                 |
//! | `\r\n`| `U+000D U+000A`        | 1                 |
//!
//! This crate finds the boundaries between grapheme clusters using the Unicode 10.0.0
//! `Grapheme_Cluster_Break` property and rule set, including the variable length
//! lookahead needed for emoji modifier sequences and regional indicator pairs.
//!
//! # Layers
//!
//! From the bottom up:
//!
//! 1. [`mod@core::code_units`] - decode a [`CodePoint`] at a code unit index, resolving
//!    surrogate pairs (UTF-16) or multi byte sequences (UTF-8). See [`TextBuffer`].
//! 2. [`mod@core::properties`] - classify a code point into a
//!    [`GraphemeBreakProperty`].
//! 3. [`mod@core::break_rules`] - decide whether a boundary exists before a candidate,
//!    given the [`BreakWindow`] scanned so far.
//! 4. [`mod@core::scanner`] - drive the window across a buffer to find the next
//!    boundary.
//! 5. [`mod@segmenter`] - split, count, and iterate clusters. [`GString`] caches the
//!    result for an owned string.
//!
//! # Example
//!
//! ```
//! use r3bl_gstring::{count_clusters, split_to_clusters, GraphemeExt};
//!
//! let text = "e\u{301}🇯🇵!";
//! assert_eq!(split_to_clusters(text), vec!["e\u{301}", "🇯🇵", "!"]);
//! assert_eq!(count_clusters(text), 3);
//!
//! // Same engine, UTF-16 code units.
//! let units: Vec<u16> = text.encode_utf16().collect();
//! assert_eq!(units.count_clusters(), 3);
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod cli;
pub mod conformance;
pub mod core;
pub mod segmenter;

// Re-export.
pub use conformance::*;
pub use core::*;
pub use segmenter::*;
