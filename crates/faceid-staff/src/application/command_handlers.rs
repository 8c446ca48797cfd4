//! Command handlers for the staff context.
//!
//! Each handler validates the command, builds the employee record, and
//! forwards it to the repository.

use faceid_core::clock::Clock;
use faceid_core::context::RequestContext;
use faceid_core::error::DomainError;
use faceid_core::repository::Repository;
use tracing::debug;

use crate::domain::commands::{CreateEmployee, DeleteEmployee, UpdateEmployee};
use crate::domain::employee::Employee;

fn validate_name(name: &str) -> Result<String, DomainError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::Validation(
            "employee name must not be empty".into(),
        ));
    }
    Ok(name.to_owned())
}

fn normalize_position(position: Option<&str>) -> Option<String> {
    position
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
}

/// Handles the `CreateEmployee` command and returns the stored employee with
/// its assigned id.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the name is blank, or
/// `DomainError::Cancelled` if the context fired.
pub async fn handle_create_employee(
    ctx: &RequestContext,
    command: &CreateEmployee,
    clock: &dyn Clock,
    repo: &dyn Repository<Employee>,
) -> Result<Employee, DomainError> {
    let mut employee = Employee {
        id: 0,
        name: validate_name(&command.name)?,
        position: normalize_position(command.position.as_deref()),
        face_image_id: command.face_image_id,
        updated_at: clock.now(),
    };

    employee.id = repo.create(ctx, employee.clone()).await?;
    debug!(
        correlation_id = %command.correlation_id,
        employee_id = employee.id,
        "employee created"
    );

    Ok(employee)
}

/// Handles the `UpdateEmployee` command. The path id is written onto the
/// record so the stored key and the stored id always agree.
///
/// # Errors
///
/// Returns `DomainError::Validation` for a zero id or blank name,
/// `DomainError::NotFound` if the repository requires existing ids, or
/// `DomainError::Cancelled` if the context fired.
pub async fn handle_update_employee(
    ctx: &RequestContext,
    command: &UpdateEmployee,
    clock: &dyn Clock,
    repo: &dyn Repository<Employee>,
) -> Result<Employee, DomainError> {
    if command.employee_id == 0 {
        return Err(DomainError::Validation(
            "employee id must be non-zero".into(),
        ));
    }

    let employee = Employee {
        id: command.employee_id,
        name: validate_name(&command.name)?,
        position: normalize_position(command.position.as_deref()),
        face_image_id: command.face_image_id,
        updated_at: clock.now(),
    };

    repo.update(ctx, command.employee_id, employee).await
}

/// Handles the `DeleteEmployee` command.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no such employee exists, or
/// `DomainError::Cancelled` if the context fired.
pub async fn handle_delete_employee(
    ctx: &RequestContext,
    command: &DeleteEmployee,
    repo: &dyn Repository<Employee>,
) -> Result<(), DomainError> {
    repo.delete(ctx, command.employee_id).await?;
    debug!(
        correlation_id = %command.correlation_id,
        employee_id = command.employee_id,
        "employee deleted"
    );
    Ok(())
}
