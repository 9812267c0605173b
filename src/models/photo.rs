// src/models/photo.rs

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Uploaded photo. Also the API response shape for upload and list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Photo {
    pub id: Uuid,
    /// Opaque payload, stored and returned byte-for-byte
    pub image_base64: String,
    pub uploaded_at: DateTime<Utc>,
}

impl Photo {
    /// New photo stamped with the current server time, at the
    /// microsecond precision TIMESTAMPTZ keeps
    pub fn new(image_base64: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            image_base64,
            uploaded_at: Utc::now().trunc_subsecs(6),
        }
    }
}

/// Request body for POST /api/photos
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUpload {
    pub image_base64: String,
}
