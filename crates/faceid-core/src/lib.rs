//! FaceID Core — shared domain abstractions.
//!
//! This crate defines the entity and repository contracts that every
//! entity context (staff, images, time records) builds on, together with
//! the per-request cancellation carrier. It contains no storage code.

pub mod clock;
pub mod context;
pub mod entity;
pub mod error;
pub mod repository;
