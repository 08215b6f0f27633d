//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::{ConnectionConfigError, ConnectionOptions};
use crate::error::CoreResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `ormkit_adapters::filesystem::LocalFilesystem` (production)
/// - `ormkit_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create or truncate `path` and write `content` to it.
    ///
    /// Must not create missing parent directories.
    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()>;
}

/// Port for loading the connection config document.
///
/// Implemented by:
/// - `ormkit_adapters::connection_source::JsonConnectionSource` (reads JSON from disk)
/// - `ormkit_adapters::connection_source::StaticConnectionSource` (fixed records, testing)
#[cfg_attr(test, automock)]
pub trait ConnectionSource: Send + Sync {
    /// Load every connection record from the document at `path`, in order.
    fn load(&self, path: &Path) -> Result<Vec<ConnectionOptions>, ConnectionConfigError>;
}
