//! Domain error types.

use thiserror::Error;

use crate::context::CancelReason;

/// Top-level domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// No entity is stored under the requested identifier.
    #[error("{entity} id={id} not found")]
    NotFound {
        /// Entity kind, e.g. `employee`.
        entity: &'static str,
        /// The identifier that was looked up.
        id: u64,
    },

    /// The caller's request context fired before the operation ran.
    #[error("operation cancelled: {0}")]
    Cancelled(CancelReason),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),
}

impl DomainError {
    /// Returns `true` for [`DomainError::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` for [`DomainError::Cancelled`], whatever the reason.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}
