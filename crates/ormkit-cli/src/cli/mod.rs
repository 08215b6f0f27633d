//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Legacy two-letter spelling of `--config`.
const LEGACY_CONFIG_FLAG: &str = "-cf";

/// Rewrite `-cf <FILE>` and `-cf=<FILE>` to `--config`.
///
/// clap reads `-cf` as `-c f`, so the legacy spelling has to be fixed up
/// before parsing. Tokens after `--` are left alone.
pub fn rewrite_legacy_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    arg
                }
                Some(LEGACY_CONFIG_FLAG) => OsString::from("--config"),
                Some(s) => match s.strip_prefix("-cf=") {
                    Some(value) => OsString::from(format!("--config={value}")),
                    None => arg,
                },
                None => arg,
            }
        })
        .collect()
}

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "ormkit",
    bin_name = "ormkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "ORM code generation helpers",
    long_about = "ormkit generates boilerplate source files for ORM projects, \
                  reading output locations from your connection config.",
    after_help = "EXAMPLES:\n\
        \x20 ormkit subscriber:create --name UserSubscriber\n\
        \x20 ormkit subscriber:create -n AuditSubscriber -c reporting\n\
        \x20 ormkit subscriber:create -n PostSubscriber -d src/subscriber",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generates a new subscriber.
    #[command(
        name = "subscriber:create",
        about = "Generates a new subscriber.",
        after_help = "EXAMPLES:\n\
            \x20 ormkit subscriber:create --name UserSubscriber\n\
            \x20 ormkit subscriber:create --name UserSubscriber --dir src/subscriber\n\
            \x20 ormkit subscriber:create --name UserSubscriber --connection reporting --cf config/orm.json"
    )]
    SubscriberCreate(SubscriberCreateArgs),
}

// ── subscriber:create ─────────────────────────────────────────────────────────

/// Arguments for `ormkit subscriber:create`.
#[derive(Debug, Args)]
pub struct SubscriberCreateArgs {
    /// Class name; also the file name (`<NAME>.ts`).
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Name of the subscriber class."
    )]
    pub name: String,

    /// Connection whose config entry supplies `cli.subscribersDir`.
    ///
    /// Falls back to `defaults.connection` from the settings, then to
    /// `default`.
    #[arg(
        short = 'c',
        long = "connection",
        value_name = "CONNECTION",
        help = "Name of the connection on which to run a query [default: default]"
    )]
    pub connection: Option<String>,

    /// Output directory; when set, the connection config is not read.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Directory where subscriber should be created."
    )]
    pub dir: Option<String>,

    /// Connection config file, relative to the current directory.
    #[arg(
        long = "config",
        visible_alias = "cf",
        value_name = "FILE",
        help = "Name of the file with connection configuration (also -cf). [default: ormconfig.json]"
    )]
    pub config: Option<PathBuf>,
}

// ── tests ─────────────────────────────────────────────────────────────────────
