//! The employee entity.

use chrono::{DateTime, Utc};
use faceid_core::entity::Entity;
use serde::{Deserialize, Serialize};

/// A member of staff whose attendance is tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Repository-assigned identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Job title, if known.
    pub position: Option<String>,
    /// Reference face image used for identification.
    pub face_image_id: Option<u64>,
    /// When the record was last written.
    pub updated_at: DateTime<Utc>,
}

impl Entity for Employee {
    const KIND: &'static str = "employee";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}
