//! FaceID attendance — image context.
//!
//! Stores the face images used both as reference photos for employees and
//! as snapshots captured at check-in time.

pub mod application;
pub mod domain;
