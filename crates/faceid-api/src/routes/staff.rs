//! Routes for the staff context.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use faceid_staff::application::{command_handlers, query_handlers};
use faceid_staff::domain::commands;
use faceid_staff::domain::employee::Employee;

use crate::context::RequestScope;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST / and PUT /{id}.
#[derive(Debug, Deserialize)]
pub struct EmployeeRequest {
    /// The employee's name.
    pub name: String,
    /// The employee's job title.
    pub position: Option<String>,
    /// Reference face image.
    pub face_image_id: Option<u64>,
}

/// GET /
#[instrument(skip_all)]
async fn list_employees(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = query_handlers::list_employees(&ctx, &*state.staff_repository).await?;
    Ok(Json(employees))
}

/// POST /
#[instrument(skip(state, ctx, request))]
async fn create_employee(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
    Json(request): Json<EmployeeRequest>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let command = commands::CreateEmployee {
        correlation_id: Uuid::new_v4(),
        name: request.name,
        position: request.position,
        face_image_id: request.face_image_id,
    };

    info!(correlation_id = %command.correlation_id, "handling create_employee command");

    let employee = command_handlers::handle_create_employee(
        &ctx,
        &command,
        state.clock.as_ref(),
        &*state.staff_repository,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /{id}
#[instrument(skip(state, ctx))]
async fn get_employee(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
    Path(employee_id): Path<u64>,
) -> Result<Json<Employee>, ApiError> {
    let employee =
        query_handlers::get_employee_by_id(&ctx, employee_id, &*state.staff_repository).await?;
    Ok(Json(employee))
}

/// PUT /{id}
#[instrument(skip(state, ctx, request))]
async fn update_employee(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
    Path(employee_id): Path<u64>,
    Json(request): Json<EmployeeRequest>,
) -> Result<Json<Employee>, ApiError> {
    let command = commands::UpdateEmployee {
        correlation_id: Uuid::new_v4(),
        employee_id,
        name: request.name,
        position: request.position,
        face_image_id: request.face_image_id,
    };

    info!(correlation_id = %command.correlation_id, "handling update_employee command");

    let employee = command_handlers::handle_update_employee(
        &ctx,
        &command,
        state.clock.as_ref(),
        &*state.staff_repository,
    )
    .await?;

    Ok(Json(employee))
}

/// DELETE /{id}
#[instrument(skip(state, ctx))]
async fn delete_employee(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
    Path(employee_id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    let command = commands::DeleteEmployee {
        correlation_id: Uuid::new_v4(),
        employee_id,
    };

    info!(correlation_id = %command.correlation_id, "handling delete_employee command");

    command_handlers::handle_delete_employee(&ctx, &command, &*state.staff_repository).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for the staff context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/{id}",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::Request;
    use faceid_store::UpdatePolicy;
    use faceid_test_support::{FixedClock, fixed_now};
    use serde_json::Value;
    use tokio_util::sync::CancellationToken;
    use tower::ServiceExt;

    fn test_app_state() -> AppState {
        AppState::new(Arc::new(FixedClock(fixed_now())), UpdatePolicy::Upsert)
    }

    fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_employee_returns_201_with_assigned_id() {
        // Arrange
        let app = router().with_state(test_app_state());
        let body = serde_json::json!({ "name": "Alice", "position": "Engineer" });

        // Act
        let response = app.oneshot(json_request("POST", "/", &body)).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["position"], "Engineer");
        assert!(json["face_image_id"].is_null());
    }

    #[tokio::test]
    async fn test_create_employee_returns_422_for_missing_name() {
        // Arrange
        let app = router().with_state(test_app_state());

        // Act
        let response = app
            .oneshot(json_request("POST", "/", &serde_json::json!({})))
            .await
            .unwrap();

        // Assert — Axum returns 422 for deserialization failures.
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_create_employee_returns_400_for_blank_name() {
        let app = router().with_state(test_app_state());

        let response = app
            .oneshot(json_request(
                "POST",
                "/",
                &serde_json::json!({ "name": "  " }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_get_employee_returns_404_for_unknown_id() {
        let app = router().with_state(test_app_state());

        let request = Request::builder().uri("/41").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "not_found");
        assert_eq!(json["message"], "employee id=41 not found");
    }

    #[tokio::test]
    async fn test_delete_employee_returns_204_then_404() {
        // Arrange
        let app = router().with_state(test_app_state());
        let created = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/",
                &serde_json::json!({ "name": "Alice" }),
            ))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);

        // Act
        let delete = || {
            Request::builder()
                .method("DELETE")
                .uri("/1")
                .body(Body::empty())
                .unwrap()
        };
        let first = app.clone().oneshot(delete()).await.unwrap();
        let second = app.oneshot(delete()).await.unwrap();

        // Assert
        assert_eq!(first.status(), StatusCode::NO_CONTENT);
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_requests_return_499_after_shutdown_begins() {
        // Arrange
        let shutdown = CancellationToken::new();
        let app = router().with_state(test_app_state().with_shutdown(shutdown.clone()));
        shutdown.cancel();

        // Act
        let response = app
            .oneshot(json_request(
                "POST",
                "/",
                &serde_json::json!({ "name": "Late" }),
            ))
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status().as_u16(), 499);
        assert_eq!(body_json(response).await["error"], "client_closed_request");
    }

    #[tokio::test]
    async fn test_requests_return_504_when_deadline_already_due() {
        let app = router()
            .with_state(test_app_state().with_request_timeout(Some(Duration::ZERO)));

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body_json(response).await["error"], "deadline_exceeded");
    }
}
