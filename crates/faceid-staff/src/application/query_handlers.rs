//! Query handlers for the staff context.

use faceid_core::context::RequestContext;
use faceid_core::error::DomainError;
use faceid_core::repository::Repository;

use crate::domain::employee::Employee;

/// Retrieves an employee by id.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no such employee exists, or
/// `DomainError::Cancelled` if the context fired.
pub async fn get_employee_by_id(
    ctx: &RequestContext,
    employee_id: u64,
    repo: &dyn Repository<Employee>,
) -> Result<Employee, DomainError> {
    repo.read(ctx, employee_id).await
}

/// Lists every employee, ascending by id.
///
/// # Errors
///
/// Returns `DomainError::Cancelled` if the context fired.
pub async fn list_employees(
    ctx: &RequestContext,
    repo: &dyn Repository<Employee>,
) -> Result<Vec<Employee>, DomainError> {
    repo.read_all(ctx).await
}
