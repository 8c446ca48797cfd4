//! Command handlers for the time record context.

use chrono::{DateTime, Utc};
use faceid_core::clock::Clock;
use faceid_core::context::RequestContext;
use faceid_core::error::DomainError;
use faceid_core::repository::Repository;
use tracing::debug;

use crate::domain::commands::{CorrectTimeRecord, DeleteTimeRecord, RecordTime};
use crate::domain::time_record::TimeRecord;

fn validate(
    employee_id: u64,
    recorded_at: DateTime<Utc>,
    clock: &dyn Clock,
) -> Result<(), DomainError> {
    if employee_id == 0 {
        return Err(DomainError::Validation(
            "time record must reference an employee".into(),
        ));
    }
    let now = clock.now();
    if recorded_at > now {
        return Err(DomainError::Validation(format!(
            "time record at {recorded_at} is in the future (now {now})"
        )));
    }
    Ok(())
}

/// Handles the `RecordTime` command and returns the stored record with its
/// assigned id. A missing timestamp is filled from `clock`.
///
/// # Errors
///
/// Returns `DomainError::Validation` for a zero employee id or a timestamp
/// in the future, or `DomainError::Cancelled` if the context fired.
pub async fn handle_record_time(
    ctx: &RequestContext,
    command: &RecordTime,
    clock: &dyn Clock,
    repo: &dyn Repository<TimeRecord>,
) -> Result<TimeRecord, DomainError> {
    let recorded_at = command.recorded_at.unwrap_or_else(|| clock.now());
    validate(command.employee_id, recorded_at, clock)?;

    let mut record = TimeRecord {
        id: 0,
        employee_id: command.employee_id,
        direction: command.direction,
        recorded_at,
        image_id: command.image_id,
    };

    record.id = repo.create(ctx, record.clone()).await?;
    debug!(
        correlation_id = %command.correlation_id,
        time_record_id = record.id,
        employee_id = record.employee_id,
        direction = ?record.direction,
        "time recorded"
    );

    Ok(record)
}

/// Handles the `CorrectTimeRecord` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` for a zero id or invalid record,
/// `DomainError::NotFound` if the repository requires existing ids, or
/// `DomainError::Cancelled` if the context fired.
pub async fn handle_correct_time_record(
    ctx: &RequestContext,
    command: &CorrectTimeRecord,
    clock: &dyn Clock,
    repo: &dyn Repository<TimeRecord>,
) -> Result<TimeRecord, DomainError> {
    if command.time_record_id == 0 {
        return Err(DomainError::Validation(
            "time record id must be non-zero".into(),
        ));
    }
    validate(command.employee_id, command.recorded_at, clock)?;

    let record = TimeRecord {
        id: command.time_record_id,
        employee_id: command.employee_id,
        direction: command.direction,
        recorded_at: command.recorded_at,
        image_id: command.image_id,
    };

    repo.update(ctx, command.time_record_id, record).await
}

/// Handles the `DeleteTimeRecord` command.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no such record exists, or
/// `DomainError::Cancelled` if the context fired.
pub async fn handle_delete_time_record(
    ctx: &RequestContext,
    command: &DeleteTimeRecord,
    repo: &dyn Repository<TimeRecord>,
) -> Result<(), DomainError> {
    repo.delete(ctx, command.time_record_id).await?;
    debug!(
        correlation_id = %command.correlation_id,
        time_record_id = command.time_record_id,
        "time record deleted"
    );
    Ok(())
}
