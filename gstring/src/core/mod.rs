// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Connect to source file.
pub mod break_rules;
pub mod code_units;
pub mod common;
pub mod log;
pub mod properties;
pub mod scanner;

// Re-export.
pub use break_rules::*;
pub use code_units::*;
pub use common::*;
pub use log::*;
pub use properties::*;
pub use scanner::*;
