// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Check the segmenter against the Unicode `GraphemeBreakTest.txt` data file for
//! Unicode 10.0.0. Each line of that file is a test case, eg:
//!
//! ```text
//! ÷ 0020 × 0308 ÷ 0020 ÷	#  ÷ [0.2] SPACE (Other) × [9.0] ...
//! ```
//!
//! `÷` marks a boundary and `×` marks no boundary between the code points on either
//! side. The file is not bundled, download it from
//! <https://www.unicode.org/Public/10.0.0/ucd/auxiliary/GraphemeBreakTest.txt>.

// Attach sources.
pub mod conformance_case;
pub mod parse_test_line;
pub mod run_conformance;

// Re-export.
pub use conformance_case::*;
pub use parse_test_line::*;
pub use run_conformance::*;
