// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The `gstring` binary returns `miette::Result` from `main()`. When an error makes it
//! all the way up, miette's global report handler renders it. This module configures
//! that handler.
//!
//! - The global default implementation of the [`ReportHandler`
//!   trait](https://docs.rs/miette/latest/miette/trait.ReportHandler.html) is done by
//!   [`MietteHandler` struct](https://docs.rs/miette/latest/miette/struct.MietteHandler.html).
//! - [`MietteHandlerOpts`] configures it, and [`miette::set_hook`] registers it.

use miette::MietteHandlerOpts;
use tracing::debug;

/// Fallback when the terminal size can't be queried (eg: output is piped).
pub const DEFAULT_REPORT_WIDTH: usize = 80;

/// The [`miette::ErrorHook`] is lazily evaluated.
///
/// The terminal width will be calculated just at the time of the global error handler
/// being used. So if an error never occurs, then the terminal width will never be
/// calculated.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(DEFAULT_REPORT_WIDTH, |(columns, _rows)| usize::from(columns));
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}
