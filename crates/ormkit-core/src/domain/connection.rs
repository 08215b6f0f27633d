//! Connection config records.
//!
//! The connection config document (`ormconfig.json`) is an ordered JSON array
//! of connection records. Only two fields matter to this tool: the record's
//! `name` and `cli.subscribersDir`. Everything else in a record is ignored
//! on deserialization.

use serde::{Deserialize, Serialize};

use super::request::DEFAULT_CONNECTION;

/// One record of the connection config document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionOptions {
    /// Connection name. Absent (or empty) marks the implicit default
    /// connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cli: Option<CliOptions>,
}

/// The `cli` section of a connection record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribers_dir: Option<String>,
}

impl ConnectionOptions {
    /// Record named `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            cli: None,
        }
    }

    /// Record with no name (the implicit default connection).
    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn with_subscribers_dir(mut self, dir: impl Into<String>) -> Self {
        self.cli = Some(CliOptions {
            subscribers_dir: Some(dir.into()),
        });
        self
    }

    /// Whether this record answers a request for `connection`.
    ///
    /// A record matches when its name equals the requested one, or when the
    /// request is for `"default"` (or names nothing) and the record itself
    /// has no name. Empty strings count as absent on both sides.
    ///
    /// A record literally named `"default"` therefore matches a `"default"`
    /// request too, through the equality branch.
    pub fn matches(&self, connection: Option<&str>) -> bool {
        let requested = connection.filter(|c| !c.is_empty());
        let own = self.name.as_deref().filter(|n| !n.is_empty());

        if own == requested {
            return true;
        }

        own.is_none() && matches!(requested, None | Some(DEFAULT_CONNECTION))
    }

    /// `cli.subscribersDir`, if set and non-empty.
    pub fn subscribers_dir(&self) -> Option<&str> {
        self.cli
            .as_ref()
            .and_then(|cli| cli.subscribers_dir.as_deref())
            .filter(|dir| !dir.is_empty())
    }
}

/// First record in `connections` that matches `connection`.
pub fn find_connection<'a>(
    connections: &'a [ConnectionOptions],
    connection: Option<&str>,
) -> Option<&'a ConnectionOptions> {
    connections.iter().find(|c| c.matches(connection))
}
