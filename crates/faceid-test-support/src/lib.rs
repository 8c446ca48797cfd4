//! Shared test fixtures for the FaceID attendance backend.

mod clock;
mod context;

pub use clock::{FixedClock, fixed_now};
pub use context::{cancelled_context, expired_context};
