//! Routes for the time record context.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use faceid_time_records::application::{command_handlers, query_handlers};
use faceid_time_records::domain::commands;
use faceid_time_records::domain::time_record::{Direction, TimeRecord};

use crate::context::RequestScope;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /.
#[derive(Debug, Deserialize)]
pub struct RecordTimeRequest {
    /// Employee that was recognised.
    pub employee_id: u64,
    /// Arrival or departure.
    pub direction: Direction,
    /// When the face was recognised; defaults to the server clock.
    pub recorded_at: Option<DateTime<Utc>>,
    /// Snapshot captured at the terminal.
    pub image_id: Option<u64>,
}

/// Request body for PUT /{id}.
#[derive(Debug, Deserialize)]
pub struct CorrectTimeRecordRequest {
    /// Employee that was recognised.
    pub employee_id: u64,
    /// Arrival or departure.
    pub direction: Direction,
    /// When the face was recognised.
    pub recorded_at: DateTime<Utc>,
    /// Snapshot captured at the terminal.
    pub image_id: Option<u64>,
}

/// GET /
#[instrument(skip_all)]
async fn list_time_records(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
) -> Result<Json<Vec<TimeRecord>>, ApiError> {
    let records = query_handlers::list_time_records(&ctx, &*state.time_record_repository).await?;
    Ok(Json(records))
}

/// POST /
#[instrument(skip(state, ctx, request), fields(employee_id = request.employee_id))]
async fn record_time(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
    Json(request): Json<RecordTimeRequest>,
) -> Result<(StatusCode, Json<TimeRecord>), ApiError> {
    let command = commands::RecordTime {
        correlation_id: Uuid::new_v4(),
        employee_id: request.employee_id,
        direction: request.direction,
        recorded_at: request.recorded_at,
        image_id: request.image_id,
    };

    info!(correlation_id = %command.correlation_id, "handling record_time command");

    let record = command_handlers::handle_record_time(
        &ctx,
        &command,
        state.clock.as_ref(),
        &*state.time_record_repository,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /{id}
#[instrument(skip(state, ctx))]
async fn get_time_record(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
    Path(time_record_id): Path<u64>,
) -> Result<Json<TimeRecord>, ApiError> {
    let record =
        query_handlers::get_time_record_by_id(&ctx, time_record_id, &*state.time_record_repository)
            .await?;
    Ok(Json(record))
}

/// PUT /{id}
#[instrument(skip(state, ctx, request))]
async fn correct_time_record(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
    Path(time_record_id): Path<u64>,
    Json(request): Json<CorrectTimeRecordRequest>,
) -> Result<Json<TimeRecord>, ApiError> {
    let command = commands::CorrectTimeRecord {
        correlation_id: Uuid::new_v4(),
        time_record_id,
        employee_id: request.employee_id,
        direction: request.direction,
        recorded_at: request.recorded_at,
        image_id: request.image_id,
    };

    info!(correlation_id = %command.correlation_id, "handling correct_time_record command");

    let record = command_handlers::handle_correct_time_record(
        &ctx,
        &command,
        state.clock.as_ref(),
        &*state.time_record_repository,
    )
    .await?;

    Ok(Json(record))
}

/// DELETE /{id}
#[instrument(skip(state, ctx))]
async fn delete_time_record(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
    Path(time_record_id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    let command = commands::DeleteTimeRecord {
        correlation_id: Uuid::new_v4(),
        time_record_id,
    };

    info!(correlation_id = %command.correlation_id, "handling delete_time_record command");

    command_handlers::handle_delete_time_record(&ctx, &command, &*state.time_record_repository)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for the time record context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_time_records).post(record_time))
        .route(
            "/{id}",
            get(get_time_record)
                .put(correct_time_record)
                .delete(delete_time_record),
        )
}
