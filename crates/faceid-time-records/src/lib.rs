//! FaceID attendance — time record context.
//!
//! A time record is written each time a recognised face passes the
//! terminal, marking an employee as checked in or out.

pub mod application;
pub mod domain;
