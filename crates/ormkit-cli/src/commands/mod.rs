//! Command handlers, one module per subcommand.

pub mod subscriber_create;
