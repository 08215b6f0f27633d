use std::path::PathBuf;
use thiserror::Error;

/// Why the connection config document could not be used.
///
/// Never surfaced to the user: [`crate::application::SubscriberService`]
/// logs it and falls back to "no directory".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectionConfigError {
    /// File missing or unreadable.
    #[error("cannot read connection config {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    /// Invalid JSON, or JSON that is not an array of connection records.
    #[error("cannot parse connection config {path}: {reason}")]
    ParseFailed { path: PathBuf, reason: String },
}

impl ConnectionConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::ReadFailed { path, .. } | Self::ParseFailed { path, .. } => path,
        }
    }
}
