//! The face image entity.

use chrono::{DateTime, Utc};
use faceid_core::entity::Entity;
use serde::{Deserialize, Serialize};

/// Content types accepted for face images.
pub const SUPPORTED_CONTENT_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Largest accepted image payload, in bytes.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// A stored face image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Repository-assigned identifier.
    pub id: u64,
    /// Employee the face belongs to, if it has been matched.
    pub employee_id: Option<u64>,
    /// Original file name.
    pub file_name: String,
    /// MIME type, one of [`SUPPORTED_CONTENT_TYPES`].
    pub content_type: String,
    /// Raw image bytes.
    pub data: Vec<u8>,
    /// When the image was uploaded or last replaced.
    pub uploaded_at: DateTime<Utc>,
}

impl Entity for Image {
    const KIND: &'static str = "image";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}
