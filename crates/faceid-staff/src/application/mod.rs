//! Command and query handlers for the staff context.

pub mod command_handlers;
pub mod query_handlers;
