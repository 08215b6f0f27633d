//! Ormkit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `ormkit`
//! subscriber scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           ormkit-cli (CLI)              │
//! │     (parses flags, passes base path)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (SubscriberService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Filesystem, ConnectionSource)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     ormkit-adapters (Infrastructure)    │
//! │ (LocalFilesystem, JsonConnectionSource) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ScaffoldRequest, ConnectionOptions,    │
//! │  SubscriberTemplate)                    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ormkit_core::prelude::*;
//!
//! let request = ScaffoldRequest::new("UserSubscriber").with_directory("src/subscriber");
//!
//! // Adapters come from `ormkit-adapters`.
//! let service = SubscriberService::new(source, filesystem);
//! let written = service.execute(&request, "/path/to/project").unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        SubscriberService,
        ports::{ConnectionSource, Filesystem},
    };
    pub use crate::domain::{
        CliOptions, ConnectionConfigError, ConnectionOptions, ScaffoldRequest, SubscriberTemplate,
    };
    pub use crate::error::{CoreError, CoreResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
