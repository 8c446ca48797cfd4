//! Command handlers for the image context.

use faceid_core::clock::Clock;
use faceid_core::context::RequestContext;
use faceid_core::error::DomainError;
use faceid_core::repository::Repository;
use tracing::debug;

use crate::domain::commands::{DeleteImage, ReplaceImage, UploadImage};
use crate::domain::image::{Image, MAX_IMAGE_BYTES, SUPPORTED_CONTENT_TYPES};

/// Checks the payload and builds the record that will be written.
fn validated_image(
    id: u64,
    employee_id: Option<u64>,
    file_name: &str,
    content_type: &str,
    data: &[u8],
    clock: &dyn Clock,
) -> Result<Image, DomainError> {
    let file_name = file_name.trim();
    if file_name.is_empty() {
        return Err(DomainError::Validation(
            "image file name must not be empty".into(),
        ));
    }

    let content_type = content_type.trim().to_ascii_lowercase();
    if !SUPPORTED_CONTENT_TYPES.contains(&content_type.as_str()) {
        return Err(DomainError::Validation(format!(
            "unsupported image content type `{content_type}`"
        )));
    }

    if data.is_empty() {
        return Err(DomainError::Validation("image data must not be empty".into()));
    }
    if data.len() > MAX_IMAGE_BYTES {
        return Err(DomainError::Validation(format!(
            "image is {} bytes; the limit is {MAX_IMAGE_BYTES}",
            data.len()
        )));
    }

    Ok(Image {
        id,
        employee_id,
        file_name: file_name.to_owned(),
        content_type,
        data: data.to_vec(),
        uploaded_at: clock.now(),
    })
}

/// Handles the `UploadImage` command and returns the stored image with its
/// assigned id.
///
/// # Errors
///
/// Returns `DomainError::Validation` for a blank file name, unsupported
/// content type, or empty/oversized payload, or `DomainError::Cancelled` if
/// the context fired.
pub async fn handle_upload_image(
    ctx: &RequestContext,
    command: &UploadImage,
    clock: &dyn Clock,
    repo: &dyn Repository<Image>,
) -> Result<Image, DomainError> {
    let mut image = validated_image(
        0,
        command.employee_id,
        &command.file_name,
        &command.content_type,
        &command.data,
        clock,
    )?;

    image.id = repo.create(ctx, image.clone()).await?;
    debug!(
        correlation_id = %command.correlation_id,
        image_id = image.id,
        bytes = image.data.len(),
        "image uploaded"
    );

    Ok(image)
}

/// Handles the `ReplaceImage` command.
///
/// # Errors
///
/// Returns `DomainError::Validation` for a zero id or invalid payload,
/// `DomainError::NotFound` if the repository requires existing ids, or
/// `DomainError::Cancelled` if the context fired.
pub async fn handle_replace_image(
    ctx: &RequestContext,
    command: &ReplaceImage,
    clock: &dyn Clock,
    repo: &dyn Repository<Image>,
) -> Result<Image, DomainError> {
    if command.image_id == 0 {
        return Err(DomainError::Validation("image id must be non-zero".into()));
    }

    let image = validated_image(
        command.image_id,
        command.employee_id,
        &command.file_name,
        &command.content_type,
        &command.data,
        clock,
    )?;

    repo.update(ctx, command.image_id, image).await
}

/// Handles the `DeleteImage` command.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no such image exists, or
/// `DomainError::Cancelled` if the context fired.
pub async fn handle_delete_image(
    ctx: &RequestContext,
    command: &DeleteImage,
    repo: &dyn Repository<Image>,
) -> Result<(), DomainError> {
    repo.delete(ctx, command.image_id).await?;
    debug!(
        correlation_id = %command.correlation_id,
        image_id = command.image_id,
        "image deleted"
    );
    Ok(())
}
