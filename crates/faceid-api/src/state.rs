//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use faceid_core::clock::Clock;
use faceid_core::context::RequestContext;
use faceid_core::repository::Repository;
use faceid_images::domain::image::Image;
use faceid_staff::domain::employee::Employee;
use faceid_store::{InMemoryRepository, UpdatePolicy};
use faceid_time_records::domain::time_record::TimeRecord;
use tokio_util::sync::CancellationToken;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Clock used to stamp entities.
    pub clock: Arc<dyn Clock>,
    /// Employee repository.
    pub staff_repository: Arc<dyn Repository<Employee>>,
    /// Face image repository.
    pub image_repository: Arc<dyn Repository<Image>>,
    /// Attendance time record repository.
    pub time_record_repository: Arc<dyn Repository<TimeRecord>>,
    /// Cancelled when the server begins shutting down.
    pub shutdown: CancellationToken,
    /// Deadline applied to every request, if any.
    pub request_timeout: Option<Duration>,
}

impl AppState {
    /// Creates state backed by three empty in-memory repositories.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, update_policy: UpdatePolicy) -> Self {
        Self {
            clock,
            staff_repository: Arc::new(InMemoryRepository::<Employee>::with_update_policy(
                update_policy,
            )),
            image_repository: Arc::new(InMemoryRepository::<Image>::with_update_policy(
                update_policy,
            )),
            time_record_repository: Arc::new(
                InMemoryRepository::<TimeRecord>::with_update_policy(update_policy),
            ),
            shutdown: CancellationToken::new(),
            request_timeout: None,
        }
    }

    /// Uses `shutdown` as the parent of every request context.
    #[must_use]
    pub fn with_shutdown(mut self, shutdown: CancellationToken) -> Self {
        self.shutdown = shutdown;
        self
    }

    /// Sets the per-request deadline.
    #[must_use]
    pub fn with_request_timeout(mut self, request_timeout: Option<Duration>) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Builds a fresh context for one request: a child of the shutdown token,
    /// carrying the configured deadline.
    #[must_use]
    pub fn request_context(&self) -> RequestContext {
        let ctx = RequestContext::new(self.shutdown.child_token());
        match self.request_timeout {
            Some(timeout) => ctx.with_timeout(timeout),
            None => ctx,
        }
    }
}
