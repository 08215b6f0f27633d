//! Core domain layer for Ormkit.
//!
//! Pure logic only: no filesystem access, no JSON parsing. The connection
//! config document is *described* here (so adapters can deserialize into it)
//! but reading it is the job of a [`crate::application::ports::ConnectionSource`].
//!
//! - [`ScaffoldRequest`]: what the user asked for
//! - [`ConnectionOptions`]: one record of the connection config document
//! - [`SubscriberTemplate`]: the fixed source skeleton

pub mod connection;
pub mod error;
pub mod request;
pub mod template;

pub use connection::{CliOptions, ConnectionOptions, find_connection};
pub use error::ConnectionConfigError;
pub use request::{DEFAULT_CONFIG_FILE, DEFAULT_CONNECTION, ScaffoldRequest};
pub use template::{ORM_PACKAGE, SOURCE_EXTENSION, SubscriberTemplate};
