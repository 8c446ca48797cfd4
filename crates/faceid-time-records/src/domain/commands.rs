//! Commands for the time record context.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::time_record::Direction;

/// Command to record a check-in or check-out.
#[derive(Debug, Clone)]
pub struct RecordTime {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Employee that was recognised.
    pub employee_id: u64,
    /// Arrival or departure.
    pub direction: Direction,
    /// When the face was recognised; defaults to now.
    pub recorded_at: Option<DateTime<Utc>>,
    /// Snapshot captured at the terminal.
    pub image_id: Option<u64>,
}

/// Command to correct a stored time record.
#[derive(Debug, Clone)]
pub struct CorrectTimeRecord {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The time record identifier.
    pub time_record_id: u64,
    /// Employee that was recognised.
    pub employee_id: u64,
    /// Arrival or departure.
    pub direction: Direction,
    /// When the face was recognised.
    pub recorded_at: DateTime<Utc>,
    /// Snapshot captured at the terminal.
    pub image_id: Option<u64>,
}

/// Command to remove a time record.
#[derive(Debug, Clone)]
pub struct DeleteTimeRecord {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The time record identifier.
    pub time_record_id: u64,
}
