// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Read;

use super::{CLIArg, CLICommand, Encoding, describe_clusters, ui_str};
use crate::{GStringError, GStringResult, boundaries, count_clusters, ok,
            run_conformance_file};

/// What a command wants printed, and whether it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub is_success: bool,
}

impl CommandOutput {
    fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_success: true,
        }
    }
}

/// Run the parsed command. `stdin` is only read when a text argument is omitted.
///
/// # Errors
///
/// Returns [`GStringError::InvalidInput`] if stdin is not UTF-8, and the errors of
/// [`run_conformance_file`] for the `conformance` command.
pub fn handle_cli_arg(
    cli_arg: CLIArg,
    stdin: impl Read,
) -> GStringResult<CommandOutput> {
    let encoding = cli_arg.global_options.encoding;

    // % is Display, ? is Debug.
    tracing::debug!(message = "Handling command", command = ?cli_arg.command, ?encoding);

    match cli_arg.command {
        CLICommand::Split { text } => {
            let text = resolve_input(text, stdin)?;
            ok!(CommandOutput::success(split_listing(&text, encoding)))
        }
        CLICommand::Count { text } => {
            let text = resolve_input(text, stdin)?;
            let count = match encoding {
                Encoding::Utf8 => count_clusters(text.as_str()),
                Encoding::Utf16 => count_clusters(&encode_utf16(&text)[..]),
            };
            ok!(CommandOutput::success(count.to_string()))
        }
        CLICommand::Boundaries { text } => {
            let text = resolve_input(text, stdin)?;
            let indices: Vec<usize> = match encoding {
                Encoding::Utf8 => boundaries(text.as_str()).collect(),
                Encoding::Utf16 => boundaries(&encode_utf16(&text)[..]).collect(),
            };
            let line = indices
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            ok!(CommandOutput::success(line))
        }
        CLICommand::Conformance { file } => {
            let report = run_conformance_file(&file)?;
            tracing::debug!(message = "Conformance done", %report);
            ok!(CommandOutput {
                text: ui_str::conformance_summary_msg(&file, &report),
                is_success: report.is_success(),
            })
        }
    }
}

/// One line per cluster, see [`super::ClusterInfo`].
#[must_use]
pub fn split_listing(text: &str, encoding: Encoding) -> String {
    let infos = match encoding {
        Encoding::Utf8 => describe_clusters(text, ToString::to_string),
        Encoding::Utf16 => {
            describe_clusters(&encode_utf16(text)[..], String::from_utf16_lossy)
        }
    };
    infos
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Use `text` if given, otherwise read all of `stdin`. A single trailing line ending
/// is dropped from stdin input, since `echo` and most editors add one.
///
/// # Errors
///
/// Returns [`GStringError::InvalidInput`] if stdin can't be read or is not UTF-8.
pub fn resolve_input(
    text: Option<String>,
    mut stdin: impl Read,
) -> GStringResult<String> {
    if let Some(text) = text {
        return ok!(text);
    }

    let mut bytes = vec![];
    if let Err(error) = stdin.read_to_end(&mut bytes) {
        return GStringError::new_invalid_input(format!("can't read stdin, {error}"));
    }

    let mut text = match std::str::from_utf8(&bytes) {
        Ok(it) => it.to_string(),
        Err(error) => {
            return GStringError::new_invalid_input(ui_str::invalid_stdin_msg(&error));
        }
    };

    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }

    ok!(text)
}

fn encode_utf16(text: &str) -> Vec<u16> { text.encode_utf16().collect() }

#[cfg(test)]
mod tests {
    use clap::Parser;
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn run(args: &[&str], stdin: &[u8]) -> GStringResult<CommandOutput> {
        let cli_arg = CLIArg::try_parse_from(args).unwrap();
        handle_cli_arg(cli_arg, stdin)
    }

    #[test_case(&["gstring", "count", "e\u{301}🇯🇵"], "2" ; "count utf8")]
    #[test_case(&["gstring", "-e", "utf16", "count", "e\u{301}🇯🇵"], "2" ; "count utf16")]
    #[test_case(&["gstring", "boundaries", "a\r\n🇯🇵"], "1 3 11" ; "boundaries utf8")]
    #[test_case(&["gstring", "-e", "utf16", "boundaries", "a\r\n🇯🇵"], "1 3 7" ; "boundaries utf16")]
    fn test_commands(args: &[&str], expected: &str) {
        let output = run(args, b"").unwrap();
        assert_eq2!(output, CommandOutput::success(expected));
    }

    #[test]
    fn test_split_listing() {
        let output = run(&["gstring", "split", "ab"], b"").unwrap();
        assert_eq2!(output.text, "0\t0..1\t1\t\"a\"\tOther\n1\t1..2\t1\t\"b\"\tOther");
    }

    #[test]
    fn test_reads_stdin_when_text_is_omitted() {
        let output = run(&["gstring", "count"], "🇯🇵🇺\n".as_bytes()).unwrap();
        assert_eq2!(output.text, "2");
        let output = run(&["gstring", "count"], b"ab\r\n").unwrap();
        assert_eq2!(output.text, "2");
    }

    #[test]
    fn test_invalid_utf8_stdin() {
        let report = run(&["gstring", "count"], &[0x61, 0xFF]).unwrap_err();
        assert!(matches!(
            report.downcast_ref::<GStringError>(),
            Some(GStringError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_conformance_missing_file() {
        let report =
            run(&["gstring", "conformance", "/does/not/exist.txt"], b"").unwrap_err();
        assert!(matches!(
            report.downcast_ref::<GStringError>(),
            Some(GStringError::CouldNotReadFile { .. })
        ));
    }
}
