//! Query handlers for the time record context.

use faceid_core::context::RequestContext;
use faceid_core::error::DomainError;
use faceid_core::repository::Repository;

use crate::domain::time_record::TimeRecord;

/// Retrieves a time record by id.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no such record exists, or
/// `DomainError::Cancelled` if the context fired.
pub async fn get_time_record_by_id(
    ctx: &RequestContext,
    time_record_id: u64,
    repo: &dyn Repository<TimeRecord>,
) -> Result<TimeRecord, DomainError> {
    repo.read(ctx, time_record_id).await
}

/// Lists every time record, ascending by id.
///
/// # Errors
///
/// Returns `DomainError::Cancelled` if the context fired.
pub async fn list_time_records(
    ctx: &RequestContext,
    repo: &dyn Repository<TimeRecord>,
) -> Result<Vec<TimeRecord>, DomainError> {
    repo.read_all(ctx).await
}
