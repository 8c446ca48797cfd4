//! FaceID attendance — staff context.
//!
//! Responsible for the employee records that faces and time records are
//! matched against.

pub mod application;
pub mod domain;
