//! Flags shared by every subcommand, flattened into [`super::Cli`].

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum, builder::FalseyValueParser};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        long_help = "Increase logging verbosity:
    (none)  - Only warnings and errors
    -v      - Info level (subscriber written)
    -vv     - Debug level (connection config lookup)
    -vvv    - Trace level (adapter calls)"
    )]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    ///
    /// `NO_COLOR` counts when set to anything other than an empty or falsey
    /// value (`0`, `false`, `no`, `off`).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// ormkit settings file path
    ///
    /// Not the ORM connection config: `-c` and `--config` belong to
    /// `subscriber:create`, so this flag has no short form.
    #[arg(long = "settings", global = true, value_name = "FILE", env = "ORMKIT_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Output format
    #[arg(long = "output-format", global = true, value_enum, default_value = "auto")]
    pub output_format: OutputFormat,
}

/// How the success report is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain otherwise.
    #[default]
    Auto,
    /// Coloured text.
    Human,
    /// Text without ANSI codes.
    Plain,
    /// One JSON object per report.
    Json,
}

impl OutputFormat {
    /// Replace `Auto` with a concrete format.
    pub fn resolve(self, stdout_is_terminal: bool) -> Self {
        match self {
            Self::Auto if stdout_is_terminal => Self::Human,
            Self::Auto => Self::Plain,
            other => other,
        }
    }
}
