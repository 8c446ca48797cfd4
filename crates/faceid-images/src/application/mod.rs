//! Command and query handlers for the image context.

pub mod command_handlers;
pub mod query_handlers;
