//! Fixed, in-memory connection source for tests and embedding.

use std::path::Path;

use ormkit_core::{
    application::ports::ConnectionSource,
    domain::{ConnectionConfigError, ConnectionOptions},
};

/// Returns the same records for every path, or "missing" for every path.
#[derive(Debug, Clone, Default)]
pub struct StaticConnectionSource {
    connections: Option<Vec<ConnectionOptions>>,
}

impl StaticConnectionSource {
    pub fn new(connections: Vec<ConnectionOptions>) -> Self {
        Self {
            connections: Some(connections),
        }
    }

    /// Behaves like a config file that does not exist.
    pub fn missing() -> Self {
        Self { connections: None }
    }
}

impl ConnectionSource for StaticConnectionSource {
    fn load(&self, path: &Path) -> Result<Vec<ConnectionOptions>, ConnectionConfigError> {
        self.connections
            .clone()
            .ok_or_else(|| ConnectionConfigError::ReadFailed {
                path: path.to_path_buf(),
                reason: "no connection config configured".into(),
            })
    }
}
