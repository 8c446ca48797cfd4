//! Domain model and commands for the staff context.

pub mod commands;
pub mod employee;
