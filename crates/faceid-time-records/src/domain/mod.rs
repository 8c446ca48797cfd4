//! Domain model and commands for the time record context.

pub mod commands;
pub mod time_record;
