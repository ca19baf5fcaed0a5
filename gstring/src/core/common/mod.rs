// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod decl_macros;
pub mod gstring_error;
pub mod miette_setup_global_report_handler;

// Re-export.
pub use gstring_error::*;
pub use miette_setup_global_report_handler::*;
