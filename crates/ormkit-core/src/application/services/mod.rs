//! Application services - orchestrate use cases.

pub mod subscriber_service;

pub use subscriber_service::SubscriberService;
