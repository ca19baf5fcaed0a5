// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Code units are the storage units of an encoded string: 16 bit units for UTF-16 and
//! bytes for UTF-8. A [`CodePoint`] is decoded from one or more of them.
//!
//! The boundary scanner works in code unit indices. It needs three things from the
//! buffer it scans, which are captured by the [`TextBuffer`] trait:
//!
//! 1. Decode the code point at an index (resolving surrogate pairs in either
//!    direction for UTF-16, or walking back to the lead byte for UTF-8).
//! 2. Tell whether an index is the trailing part of a code point that started earlier,
//!    so it is not processed twice.
//! 3. Slice out a cluster without copying.

// Attach sources.
pub mod code_point;
pub mod text_buffer;
pub mod utf16;
pub mod utf8;

// Re-export.
pub use code_point::*;
pub use text_buffer::*;
pub use utf16::*;
pub use utf8::*;
