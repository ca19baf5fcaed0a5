// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use r3bl_gstring::{GStringResult,
                   cli::{CLIArg, handle_cli_arg, ui_str},
                   ok, setup_default_miette_global_report_handler,
                   try_initialize_logging_global};

fn main() -> GStringResult<()> {
    setup_default_miette_global_report_handler(ui_str::ISSUES_URL);

    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;

    if should_log {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let output = handle_cli_arg(cli_arg, std::io::stdin().lock())?;
    println!("{}", output.text);

    if should_log {
        tracing::debug!(message = "Stop logging...", is_success = output.is_success);
    }

    if !output.is_success {
        std::process::exit(1);
    }

    ok!()
}
