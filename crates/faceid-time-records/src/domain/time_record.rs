//! The attendance time record entity.

use chrono::{DateTime, Utc};
use faceid_core::entity::Entity;
use serde::{Deserialize, Serialize};

/// Whether the employee was arriving or leaving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Arrival.
    CheckIn,
    /// Departure.
    CheckOut,
}

/// One check-in or check-out event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRecord {
    /// Repository-assigned identifier.
    pub id: u64,
    /// Employee that was recognised.
    pub employee_id: u64,
    /// Arrival or departure.
    pub direction: Direction,
    /// When the face was recognised.
    pub recorded_at: DateTime<Utc>,
    /// Snapshot captured at the terminal, if kept.
    pub image_id: Option<u64>,
}

impl Entity for TimeRecord {
    const KIND: &'static str = "time record";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}
