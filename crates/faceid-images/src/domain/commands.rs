//! Commands for the image context.

use uuid::Uuid;

/// Command to upload a new image.
#[derive(Debug, Clone)]
pub struct UploadImage {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Employee the face belongs to.
    pub employee_id: Option<u64>,
    /// Original file name.
    pub file_name: String,
    /// MIME type.
    pub content_type: String,
    /// Raw image bytes.
    pub data: Vec<u8>,
}

/// Command to replace a stored image.
#[derive(Debug, Clone)]
pub struct ReplaceImage {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The image identifier.
    pub image_id: u64,
    /// Employee the face belongs to.
    pub employee_id: Option<u64>,
    /// Original file name.
    pub file_name: String,
    /// MIME type.
    pub content_type: String,
    /// Raw image bytes.
    pub data: Vec<u8>,
}

/// Command to remove an image.
#[derive(Debug, Clone)]
pub struct DeleteImage {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The image identifier.
    pub image_id: u64,
}
