//! FaceID Store — in-memory repository implementations.
//!
//! One [`InMemoryRepository`] instance backs each entity type. State lives
//! for the lifetime of the process and is lost on restart.

pub mod in_memory_repository;
pub mod policy;

pub use in_memory_repository::InMemoryRepository;
pub use policy::{ParseUpdatePolicyError, UpdatePolicy};
