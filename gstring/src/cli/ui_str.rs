// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

pub const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

#[must_use]
pub fn conformance_summary_msg(path: &str, report: &crate::ConformanceReport) -> String {
    if report.is_success() {
        format!("✅ {path}: {report}")
    } else {
        format!("❌ {path}: {report}")
    }
}

#[must_use]
pub fn invalid_stdin_msg(error: &std::str::Utf8Error) -> String {
    format!("stdin is not valid UTF-8, {error}")
}
