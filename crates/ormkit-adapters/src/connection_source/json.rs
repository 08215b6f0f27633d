//! Connection config loaded from a JSON file on disk.
//!
//! The document is parsed as data. It is never evaluated, so a config path
//! pointing somewhere unexpected can at worst fail to parse.

use std::{fs, path::Path};

use ormkit_core::{
    application::ports::ConnectionSource,
    domain::{ConnectionConfigError, ConnectionOptions},
};
use tracing::{debug, instrument};

/// Reads an `ormconfig.json`-style array of connection records.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConnectionSource;

impl JsonConnectionSource {
    pub fn new() -> Self {
        Self
    }
}

impl ConnectionSource for JsonConnectionSource {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn load(&self, path: &Path) -> Result<Vec<ConnectionOptions>, ConnectionConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConnectionConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let connections: Vec<ConnectionOptions> =
            serde_json::from_str(&raw).map_err(|e| ConnectionConfigError::ParseFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        debug!(count = connections.len(), "loaded connection records");
        Ok(connections)
    }
}
