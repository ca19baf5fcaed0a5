// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The grapheme cluster boundary rules (`GB3` .. `GB999` from UAX #29, Unicode
//! 10.0.0).
//!
//! Most rules only look at the pair of properties on either side of a candidate
//! boundary. Two of them need more context:
//! - `GB10`: an emoji modifier attaches to an emoji base even when `Extend`s sit in
//!   between (`E_Base Extend* × E_Modifier`).
//! - `GB12` / `GB13`: regional indicators pair up into flags, so whether to break
//!   between two of them depends on how many came before.
//!
//! So a decision is made over a [`BreakWindow`]: the anchor where the current cluster
//! started, the run of properties scanned past without a boundary, and the candidate.

// Attach sources.
pub mod break_decision;
pub mod break_window;
pub mod decide;

// Re-export.
pub use break_decision::*;
pub use break_window::*;
pub use decide::*;
