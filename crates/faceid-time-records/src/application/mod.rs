//! Command and query handlers for the time record context.

pub mod command_handlers;
pub mod query_handlers;
