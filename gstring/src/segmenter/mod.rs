// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Public API for grapheme cluster segmentation.
//!
//! | Operation                 | Allocates     | Restartable                     |
//! | :------------------------ | :------------ | :------------------------------ |
//! | [`split_to_clusters`]     | `Vec` of refs | n/a, returns a fresh `Vec`      |
//! | [`iterate_clusters`]      | no            | no, construct a new one         |
//! | [`GraphemeIterable`]      | no            | yes, every `iter()` starts over |
//! | [`count_clusters`]        | no            | n/a                             |
//! | [`GString`]               | yes, owned    | yes                             |
//!
//! All of these work on any [`crate::TextBuffer`], ie `str` and `[u16]`, and the
//! produced clusters are zero copy slices of the input. [`GraphemeExt`] exposes the
//! same operations as methods.

// Attach sources.
pub mod grapheme_clusters;
pub mod grapheme_ext;
pub mod gstring;
pub mod segment_ops;

// Re-export.
pub use grapheme_clusters::*;
pub use grapheme_ext::*;
pub use gstring::*;
pub use segment_ops::*;
