//! Route modules organized by entity context.

pub mod health;
pub mod images;
pub mod staff;
pub mod time_records;
