// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "gstring")]
#[command(about = "🔠 Split text into grapheme clusters (user perceived characters)")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  gstring [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log debug output to a file named `gstring_log.txt`"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        short = 'e',
        value_enum,
        default_value_t = Encoding::Utf8,
        help = "Code units that indices and ranges are reported in"
    )]
    pub encoding: Encoding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Encoding {
    /// Byte indices into the UTF-8 text.
    #[default]
    Utf8,
    /// UTF-16 code unit indices.
    Utf16,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(
        about = "✂️  Print each grapheme cluster with its index, range, width, and break properties\n💡 Eg: `gstring split 'e\u{301}🇯🇵'`"
    )]
    Split {
        /// Text to split. Read from stdin if omitted.
        text: Option<String>,
    },

    #[clap(about = "🔢 Print the number of grapheme clusters")]
    Count {
        /// Text to count. Read from stdin if omitted.
        text: Option<String>,
    },

    #[clap(about = "📍 Print the exclusive end index of each grapheme cluster")]
    Boundaries {
        /// Text to scan. Read from stdin if omitted.
        text: Option<String>,
    },

    #[clap(
        about = "✅ Run a GraphemeBreakTest.txt file and report failures\n💡 Eg: `gstring conformance GraphemeBreakTest.txt`"
    )]
    Conformance {
        /// Path to a GraphemeBreakTest.txt file (Unicode 10.0.0).
        file: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let cli_arg =
            CLIArg::try_parse_from(["gstring", "-l", "count", "--encoding", "utf16", "x"])
                .unwrap();
        assert!(cli_arg.global_options.enable_logging);
        assert_eq!(cli_arg.global_options.encoding, Encoding::Utf16);
        assert!(matches!(cli_arg.command, CLICommand::Count { text: Some(it) } if it == "x"));
    }

    #[test]
    fn test_text_is_optional() {
        let cli_arg = CLIArg::try_parse_from(["gstring", "split"]).unwrap();
        assert_eq!(cli_arg.global_options.encoding, Encoding::Utf8);
        assert!(matches!(cli_arg.command, CLICommand::Split { text: None }));
    }

    #[test]
    fn test_conformance_needs_a_file() {
        assert!(CLIArg::try_parse_from(["gstring", "conformance"]).is_err());
    }

    #[test]
    fn test_clap_config_is_valid() {
        use clap::CommandFactory;
        CLIArg::command().debug_assert();
    }
}
