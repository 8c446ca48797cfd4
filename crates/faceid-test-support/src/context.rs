//! Pre-fired request contexts for exercising cancellation paths.

use faceid_core::context::RequestContext;
use tokio::time::Instant;

/// A context whose token has already been cancelled.
#[must_use]
pub fn cancelled_context() -> RequestContext {
    let ctx = RequestContext::background();
    ctx.cancel();
    ctx
}

/// A context whose deadline is already due. The token itself is live, so the
/// context reports `DeadlineExceeded` rather than `Cancelled`.
#[must_use]
pub fn expired_context() -> RequestContext {
    RequestContext::background().with_deadline(Instant::now())
}
