use std::fmt;
use std::path::{Path, PathBuf};

/// Connection consulted when the caller does not name one.
pub const DEFAULT_CONNECTION: &str = "default";

/// Connection config file consulted when the caller does not name one.
pub const DEFAULT_CONFIG_FILE: &str = "ormconfig.json";

/// A single "create a subscriber" request.
///
/// Transient value object: built once per invocation and dropped after the
/// write. `name` is embedded verbatim into generated source and is **not**
/// validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    name: String,
    directory: Option<String>,
    connection: String,
    config_path: PathBuf,
}

impl ScaffoldRequest {
    /// Request with the default connection and config file and no explicit
    /// directory.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directory: None,
            connection: DEFAULT_CONNECTION.to_owned(),
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    /// Explicit output directory; bypasses the config lookup entirely.
    pub fn with_directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Same as [`Self::with_directory`] but accepts an `Option` so call-sites
    /// can forward a CLI flag unchanged.
    pub fn with_optional_directory(mut self, directory: Option<String>) -> Self {
        self.directory = directory;
        self
    }

    pub fn with_connection(mut self, connection: impl Into<String>) -> Self {
        self.connection = connection.into();
        self
    }

    /// Connection config file, relative to the base path given to the service.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn directory(&self) -> Option<&str> {
        self.directory.as_deref()
    }

    pub fn connection(&self) -> &str {
        &self.connection
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

impl fmt::Display for ScaffoldRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (connection: {}", self.name, self.connection)?;
        if let Some(dir) = &self.directory {
            write!(f, ", dir: {dir}")?;
        }
        write!(f, ")")
    }
}
