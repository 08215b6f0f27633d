//! Application layer for Ormkit.
//!
//! This layer contains:
//! - **Services**: use case orchestration ([`SubscriberService`])
//! - **Ports**: traits for the filesystem and the connection config source
//!
//! All matching rules and the template itself live in `crate::domain`.

pub mod ports;
pub mod services;

pub use services::SubscriberService;

// Re-export port traits (for adapter implementation)
pub use ports::{ConnectionSource, Filesystem};
