//! Tool settings.
//!
//! [`AppSettings`] is loaded once at startup and passed down by value.  The
//! CLI layer owns settings; the core crate never sees them.  These are the
//! settings of `ormkit` itself, not the ORM connection config
//! (`ormconfig.json`), which is read per command and may be missing.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `ORMKIT_DEFAULTS__CONNECTION`, `ORMKIT_OUTPUT__NO_COLOR`, ...
//! 3. Settings file: `--settings <FILE>` if given (must exist), otherwise
//!    `.ormkit.toml` in the current directory over the platform config file
//!    (both optional)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use ormkit_core::domain::{DEFAULT_CONFIG_FILE, DEFAULT_CONNECTION};

/// File name looked up in the current directory.
pub const LOCAL_SETTINGS_FILE: &str = ".ormkit.toml";

/// Tool settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Fallbacks for `subscriber:create` flags.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub connection: String,
    pub config_file: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub no_color: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            connection: DEFAULT_CONNECTION.into(),
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }
}

impl AppSettings {
    /// Load settings.
    ///
    /// `explicit` is the path the user passed via `--settings`; it must
    /// exist.  Otherwise the local and platform files are optional.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        match explicit {
            Some(path) => {
                debug!(path = %path.display(), "Loading settings file");
                builder = builder.add_source(File::from(path).format(FileFormat::Toml));
            }
            None => {
                if let Some(global) = Self::global_path() {
                    builder = builder
                        .add_source(File::from(global).format(FileFormat::Toml).required(false));
                }
                builder = builder.add_source(
                    File::from(cwd.join(LOCAL_SETTINGS_FILE))
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("ORMKIT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .context("Failed to read settings")?
            .try_deserialize::<Self>()
            .context("Invalid settings")?;

        debug!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Path to the platform settings file, if a home directory is known.
    pub fn global_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "ormkit", "ormkit")
            .map(|d| d.config_dir().join("config.toml"))
    }
}
