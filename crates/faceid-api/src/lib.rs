//! FaceID attendance — HTTP API.
//!
//! Thin axum layer over the staff, image, and time record contexts. Each
//! request gets its own [`faceid_core::context::RequestContext`], derived
//! from the server's shutdown token.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod context;
pub mod error;
pub mod routes;
pub mod state;

use state::AppState;

/// Builds the full application router.
pub fn build_router(state: AppState) -> Router {
    // TODO: Replace CorsLayer::permissive() with the kiosk and admin UI origins.
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/staff", routes::staff::router())
        .nest("/api/v1/images", routes::images::router())
        .nest("/api/v1/time-records", routes::time_records::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
