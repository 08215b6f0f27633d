//! Application ports (traits) for external dependencies.
//!
//! Adapters in `ormkit-adapters` implement these.
//!
//! - `Filesystem`: the single whole-file write
//! - `ConnectionSource`: loading the connection config document

pub mod output;

pub use output::{ConnectionSource, Filesystem};
