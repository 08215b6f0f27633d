//! # ormkit CLI
//!
//! Generates ORM boilerplate; currently `subscriber:create`.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Load tool settings (file + env + defaults).
//! 3. Initialise the tracing subscriber (logging).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                              |
//! |------|--------------------------------------|
//! |  0   | Success                              |
//! |  1   | Internal / filesystem error          |
//! |  2   | User / input error                   |
//! |  4   | Settings error                       |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands, rewrite_legacy_args},
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
    settings::AppSettings,
};

mod cli;
mod commands;
mod error;
mod logging;
mod output;
mod settings;

fn main() -> ExitCode {
    // Silently ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse_from(rewrite_legacy_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version arrive here too and must exit 0.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // ── 2. Load settings ──────────────────────────────────────────────────
    // Loaded before logging so `output.no_color` also applies to log lines.
    let settings = std::env::current_dir()
        .map_err(CliError::from)
        .and_then(|cwd| {
            AppSettings::load(cli.global.settings.as_deref(), &cwd).map_err(|e| {
                CliError::SettingsError {
                    message: format!("{e:#}"),
                    path: cli.global.settings.clone(),
                    source: Some(e.into()),
                }
            })
        });

    // ── 3. Initialise tracing ─────────────────────────────────────────────
    let no_color = cli.global.no_color
        || settings
            .as_ref()
            .map(|s| s.output.no_color)
            .unwrap_or(false);
    if let Err(e) = init_logging(&cli.global, no_color) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color,
        "CLI started"
    );

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => return handle_error(e, cli.global.verbose > 0, !no_color),
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &settings);
    let verbose = cli.global.verbose > 0;
    let colored = output.supports_color();

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, settings, output) {
        Ok(()) => {
            info!("ormkit completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, colored),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, settings: AppSettings, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::SubscriberCreate(cmd) => commands::subscriber_create::execute(cmd, settings, output),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool, colored: bool) -> ExitCode {
    err.log();

    // Colour only when stderr is a TTY (same logic as logging.rs).
    let msg = if colored && std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
