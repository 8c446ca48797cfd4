//! Commands for the staff context.

use uuid::Uuid;

/// Command to register a new employee.
#[derive(Debug, Clone)]
pub struct CreateEmployee {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The employee's name.
    pub name: String,
    /// The employee's job title.
    pub position: Option<String>,
    /// Reference face image.
    pub face_image_id: Option<u64>,
}

/// Command to replace an employee record.
#[derive(Debug, Clone)]
pub struct UpdateEmployee {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The employee identifier.
    pub employee_id: u64,
    /// The employee's name.
    pub name: String,
    /// The employee's job title.
    pub position: Option<String>,
    /// Reference face image.
    pub face_image_id: Option<u64>,
}

/// Command to remove an employee.
#[derive(Debug, Clone)]
pub struct DeleteEmployee {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The employee identifier.
    pub employee_id: u64,
}
