//! Routes for the image context.

use axum::extract::{DefaultBodyLimit, Path, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use faceid_images::application::{command_handlers, query_handlers};
use faceid_images::domain::commands;
use faceid_images::domain::image::{Image, MAX_IMAGE_BYTES};

use crate::context::RequestScope;
use crate::error::ApiError;
use crate::state::AppState;

/// Largest accepted request body. `data` travels as a JSON number array,
/// which takes up to four bytes (`255,`) per image byte, so a maximum-size
/// image still reaches the handler's own size check.
pub const MAX_REQUEST_BODY_BYTES: usize = 4 * MAX_IMAGE_BYTES + 64 * 1024;

/// Request body for POST / and PUT /{id}.
#[derive(Debug, Deserialize)]
pub struct ImageRequest {
    /// Employee the face belongs to.
    pub employee_id: Option<u64>,
    /// Original file name.
    pub file_name: String,
    /// MIME type.
    pub content_type: String,
    /// Raw image bytes.
    pub data: Vec<u8>,
}

/// GET /
#[instrument(skip_all)]
async fn list_images(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
) -> Result<Json<Vec<Image>>, ApiError> {
    let images = query_handlers::list_images(&ctx, &*state.image_repository).await?;
    Ok(Json(images))
}

/// POST /
#[instrument(skip(state, ctx, request), fields(file_name = %request.file_name))]
async fn upload_image(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
    Json(request): Json<ImageRequest>,
) -> Result<(StatusCode, Json<Image>), ApiError> {
    let command = commands::UploadImage {
        correlation_id: Uuid::new_v4(),
        employee_id: request.employee_id,
        file_name: request.file_name,
        content_type: request.content_type,
        data: request.data,
    };

    info!(correlation_id = %command.correlation_id, "handling upload_image command");

    let image = command_handlers::handle_upload_image(
        &ctx,
        &command,
        state.clock.as_ref(),
        &*state.image_repository,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(image)))
}

/// GET /{id}
#[instrument(skip(state, ctx))]
async fn get_image(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
    Path(image_id): Path<u64>,
) -> Result<Json<Image>, ApiError> {
    let image = query_handlers::get_image_by_id(&ctx, image_id, &*state.image_repository).await?;
    Ok(Json(image))
}

/// PUT /{id}
#[instrument(skip(state, ctx, request))]
async fn replace_image(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
    Path(image_id): Path<u64>,
    Json(request): Json<ImageRequest>,
) -> Result<Json<Image>, ApiError> {
    let command = commands::ReplaceImage {
        correlation_id: Uuid::new_v4(),
        image_id,
        employee_id: request.employee_id,
        file_name: request.file_name,
        content_type: request.content_type,
        data: request.data,
    };

    info!(correlation_id = %command.correlation_id, "handling replace_image command");

    let image = command_handlers::handle_replace_image(
        &ctx,
        &command,
        state.clock.as_ref(),
        &*state.image_repository,
    )
    .await?;

    Ok(Json(image))
}

/// DELETE /{id}
#[instrument(skip(state, ctx))]
async fn delete_image(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
    Path(image_id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    let command = commands::DeleteImage {
        correlation_id: Uuid::new_v4(),
        image_id,
    };

    info!(correlation_id = %command.correlation_id, "handling delete_image command");

    command_handlers::handle_delete_image(&ctx, &command, &*state.image_repository).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for the image context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_images).post(upload_image))
        .route(
            "/{id}",
            get(get_image).put(replace_image).delete(delete_image),
        )
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use faceid_store::UpdatePolicy;
    use faceid_test_support::{FixedClock, fixed_now};
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_app_state(update_policy: UpdatePolicy) -> AppState {
        AppState::new(Arc::new(FixedClock(fixed_now())), update_policy)
    }

    fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_upload_image_returns_201() {
        // Arrange
        let app = router().with_state(test_app_state(UpdatePolicy::Upsert));
        let body = serde_json::json!({
            "employee_id": 3,
            "file_name": "face.png",
            "content_type": "image/png",
            "data": [137, 80, 78, 71]
        });

        // Act
        let response = app.oneshot(json_request("POST", "/", &body)).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::CREATED);
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["employee_id"], 3);
        assert_eq!(json["data"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_upload_image_returns_400_for_unsupported_type() {
        let app = router().with_state(test_app_state(UpdatePolicy::Upsert));
        let body = serde_json::json!({
            "file_name": "face.bmp",
            "content_type": "image/bmp",
            "data": [1]
        });

        let response = app.oneshot(json_request("POST", "/", &body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_replace_missing_image_returns_404_when_existing_required() {
        let app = router().with_state(test_app_state(UpdatePolicy::RequireExisting));
        let body = serde_json::json!({
            "file_name": "face.png",
            "content_type": "image/png",
            "data": [1]
        });

        let response = app
            .oneshot(json_request("PUT", "/8", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_image_returns_400_for_non_numeric_id() {
        let app = router().with_state(test_app_state(UpdatePolicy::Upsert));

        let request = Request::builder()
            .uri("/abc")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
