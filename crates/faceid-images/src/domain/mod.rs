//! Domain model and commands for the image context.

pub mod commands;
pub mod image;
