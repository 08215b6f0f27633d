//! Subscriber Service - the `subscriber:create` use case.
//!
//! 1. Resolve the output directory (explicit flag, else connection config)
//! 2. Render the subscriber template
//! 3. Write it to `<base>/<directory>/<name>.ts`
//!
//! The base path is always passed in; this service never looks at the
//! process working directory.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{ConnectionSource, Filesystem},
    domain::{ScaffoldRequest, SubscriberTemplate, find_connection},
    error::CoreResult,
};

/// Generates subscriber skeletons.
pub struct SubscriberService {
    connections: Box<dyn ConnectionSource>,
    filesystem: Box<dyn Filesystem>,
}

impl SubscriberService {
    /// Create a new service with the given adapters.
    pub fn new(connections: Box<dyn ConnectionSource>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            connections,
            filesystem,
        }
    }

    /// Generate the subscriber described by `request` under `base`.
    ///
    /// Returns the path that was written. The only error is the final write
    /// failing; connection config problems are swallowed by
    /// [`Self::resolve_directory`].
    #[instrument(
        skip_all,
        fields(
            name = %request.name(),
            connection = %request.connection(),
            base = %base.as_ref().display()
        )
    )]
    pub fn execute(&self, request: &ScaffoldRequest, base: impl AsRef<Path>) -> CoreResult<PathBuf> {
        let base = base.as_ref();

        let directory = self.resolve_directory(
            Some(request.connection()),
            request.config_path(),
            request.directory(),
            base,
        );
        let file_name = SubscriberTemplate::file_name(request.name());
        let content = SubscriberTemplate::render(request.name());
        let path = output_path(base, directory.as_deref(), &file_name);

        debug!(path = %path.display(), bytes = content.len(), "Writing subscriber");
        self.filesystem.write_file(&path, &content)?;

        info!(path = %path.display(), "Subscriber created");
        Ok(path)
    }

    /// Effective output directory, or `None` for "directly under base".
    ///
    /// A non-empty explicit directory is returned unchanged. Otherwise the connection
    /// config at `base/config_path` is consulted; if it cannot be loaded the
    /// error is logged and dropped.
    pub fn resolve_directory(
        &self,
        connection: Option<&str>,
        config_path: &Path,
        explicit: Option<&str>,
        base: &Path,
    ) -> Option<String> {
        if let Some(dir) = explicit.filter(|d| !d.is_empty()) {
            debug!(directory = dir, "Using explicit directory");
            return Some(dir.to_owned());
        }

        let config_file = concat_path(base, &[config_path.as_os_str()]);
        let connections = match self.connections.load(&config_file) {
            Ok(connections) => connections,
            Err(e) => {
                debug!(
                    path = %e.path().display(),
                    reason = %e,
                    "Connection config unavailable, writing next to base"
                );
                return None;
            }
        };

        let found = find_connection(&connections, connection);
        let dir = found.and_then(|c| c.subscribers_dir()).map(str::to_owned);

        debug!(
            matched = found.is_some(),
            directory = dir.as_deref().unwrap_or("none"),
            "Connection config consulted"
        );
        dir
    }
}

/// `base + "/" + (dir + "/")? + file_name`, without any normalisation.
/// An empty `dir` is skipped.
pub fn output_path(base: &Path, directory: Option<&str>, file_name: &str) -> PathBuf {
    match directory.filter(|d| !d.is_empty()) {
        Some(dir) => concat_path(base, &[OsStr::new(dir), OsStr::new(file_name)]),
        None => concat_path(base, &[OsStr::new(file_name)]),
    }
}

// Plain string concatenation with '/'. `Path::join` would discard `base` when
// a segment is absolute.
fn concat_path(base: &Path, segments: &[&OsStr]) -> PathBuf {
    let mut raw = OsString::from(base.as_os_str());
    for segment in segments {
        raw.push("/");
        raw.push(segment);
    }
    PathBuf::from(raw)
}
