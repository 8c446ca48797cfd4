//! Per-request cancellation carrier.
//!
//! Every repository operation takes a [`RequestContext`]. The context is
//! inspected exactly once, after the repository lock is held and before any
//! state is touched; a fired context turns the call into a no-op that fails
//! with [`DomainError::Cancelled`].

use std::fmt;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::DomainError;

/// Why a request context stopped being usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// The token was cancelled explicitly (client went away, server shutting down).
    Cancelled,
    /// The deadline attached to the context has passed.
    DeadlineExceeded,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => f.write_str("request cancelled"),
            Self::DeadlineExceeded => f.write_str("deadline exceeded"),
        }
    }
}

/// Cancellation token plus an optional deadline, scoped to one request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context that is never cancelled and has no deadline.
    #[must_use]
    pub fn background() -> Self {
        Self::new(CancellationToken::new())
    }

    /// Wraps an existing token without a deadline.
    #[must_use]
    pub fn new(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Attaches a deadline. An earlier deadline already on the context wins.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    /// Attaches a deadline `timeout` from now.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Derives a context that is cancelled whenever this one is. The deadline
    /// is inherited.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// Fires the token. Children derived via [`RequestContext::child`] fire too.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns the underlying token.
    #[must_use]
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns the reason this context is done, or `None` while it is live.
    ///
    /// Explicit cancellation takes precedence over an expired deadline.
    #[must_use]
    pub fn err(&self) -> Option<CancelReason> {
        if self.token.is_cancelled() {
            return Some(CancelReason::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(CancelReason::DeadlineExceeded),
            _ => None,
        }
    }

    /// Fails with [`DomainError::Cancelled`] if the context is done.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Cancelled` carrying the [`CancelReason`].
    pub fn check(&self) -> Result<(), DomainError> {
        match self.err() {
            Some(reason) => Err(DomainError::Cancelled(reason)),
            None => Ok(()),
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::background()
    }
}
