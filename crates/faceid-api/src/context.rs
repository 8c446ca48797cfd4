//! Per-request context extractor.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use faceid_core::context::RequestContext;

use crate::state::AppState;

/// Extracts the [`RequestContext`] every repository call is made with.
#[derive(Debug, Clone)]
pub struct RequestScope(pub RequestContext);

impl FromRequestParts<AppState> for RequestScope {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(state.request_context()))
    }
}
