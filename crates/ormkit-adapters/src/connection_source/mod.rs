//! Connection config sources.

mod json;
mod fixed;

pub use fixed::StaticConnectionSource;
pub use json::JsonConnectionSource;
