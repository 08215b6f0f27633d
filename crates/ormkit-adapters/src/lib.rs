//! Infrastructure adapters for ormkit.
//!
//! This crate implements the ports defined in `ormkit-core::application::ports`.
//! It contains all I/O and the JSON parsing of the connection config.

pub mod connection_source;
pub mod filesystem;

// Re-export commonly used adapters
pub use connection_source::{JsonConnectionSource, StaticConnectionSource};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
