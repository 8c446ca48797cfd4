//! Query handlers for the image context.

use faceid_core::context::RequestContext;
use faceid_core::error::DomainError;
use faceid_core::repository::Repository;

use crate::domain::image::Image;

/// Retrieves an image by id.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no such image exists, or
/// `DomainError::Cancelled` if the context fired.
pub async fn get_image_by_id(
    ctx: &RequestContext,
    image_id: u64,
    repo: &dyn Repository<Image>,
) -> Result<Image, DomainError> {
    repo.read(ctx, image_id).await
}

/// Lists every image, ascending by id.
///
/// # Errors
///
/// Returns `DomainError::Cancelled` if the context fired.
pub async fn list_images(
    ctx: &RequestContext,
    repo: &dyn Repository<Image>,
) -> Result<Vec<Image>, DomainError> {
    repo.read_all(ctx).await
}
