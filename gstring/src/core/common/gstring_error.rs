// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)
//!
//! The segmentation engine itself never fails. Errors only show up at the edges:
//! decoding raw input into text, parsing conformance test files, and reading files
//! from disk in the CLI.

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`],
/// which wrap [`GStringError`] (or any other [`std::error::Error`]).
pub type GStringResult<T> = miette::Result<T>;

/// Errors that can be returned by the public API.
///
/// | Variant                      | Cause                                              |
/// | :--------------------------- | :------------------------------------------------- |
/// | [`InvalidInput`]             | Input bytes / code units could not be used as text |
/// | [`MalformedConformanceLine`] | A `GraphemeBreakTest.txt` line did not parse       |
/// | [`CouldNotReadFile`]         | File I/O failed                                    |
///
/// [`InvalidInput`]: Self::InvalidInput
/// [`MalformedConformanceLine`]: Self::MalformedConformanceLine
/// [`CouldNotReadFile`]: Self::CouldNotReadFile
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum GStringError {
    #[error("🚫 Invalid input: {reason}")]
    #[diagnostic(
        code(r3bl_gstring::invalid_input),
        help("Pass well formed UTF-8 (or UTF-16) text, and a single grapheme cluster as a separator")
    )]
    InvalidInput { reason: String },

    #[error("📑 Malformed conformance test line {line_number}: '{line}'")]
    #[diagnostic(
        code(r3bl_gstring::conformance::malformed_line),
        help("Expected the GraphemeBreakTest.txt format, eg: `÷ 0020 × 0308 ÷ # comment`")
    )]
    MalformedConformanceLine { line_number: usize, line: String },

    #[error("📂 Could not read file: '{path}'")]
    #[diagnostic(code(r3bl_gstring::io::read_file))]
    CouldNotReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl GStringError {
    /// Convenience constructor that wraps [`GStringError::InvalidInput`] in a
    /// [`GStringResult`].
    pub fn new_invalid_input<T>(reason: impl Into<String>) -> GStringResult<T> {
        Err(GStringError::InvalidInput {
            reason: reason.into(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_downcastable() {
        let result: GStringResult<()> = GStringError::new_invalid_input("bad bytes");
        let report = result.unwrap_err();
        let error = report.downcast_ref::<GStringError>().unwrap();
        assert!(matches!(error, GStringError::InvalidInput { reason } if reason == "bad bytes"));
    }

    #[test]
    fn test_diagnostic_code() {
        use miette::Diagnostic;

        let error = GStringError::MalformedConformanceLine {
            line_number: 7,
            line: "÷ XYZ ÷".to_string(),
        };
        let code = error.code().unwrap().to_string();
        assert_eq!(code, "r3bl_gstring::conformance::malformed_line");
        assert!(error.to_string().contains("line 7"));
    }
}
