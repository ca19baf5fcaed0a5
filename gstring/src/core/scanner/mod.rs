// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod boundary_scanner;
pub mod next_boundary;

// Re-export.
pub use boundary_scanner::*;
pub use next_boundary::*;
