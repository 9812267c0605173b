// src/models/relationship.rs
// DOCUMENTATION: Singleton relationship record and its API payloads
// PURPOSE: Single home for the default start date and main photo

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Start date used whenever the record has to be created without one
/// (25 January 2025, 20:30 Turkey time)
pub const DEFAULT_START_DATE: &str = "2025-01-25T20:30:00+03:00";

/// Main photo shown while none has been uploaded
pub const DEFAULT_MAIN_PHOTO_URL: &str =
    "https://images.unsplash.com/photo-1518199266791-5375a83190b7?w=800";

/// The relationship record. The `relationship` collection holds at most one
/// of these by convention; nothing in the store enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RelationshipRecord {
    pub id: Uuid,
    /// ISO-8601 string exactly as the client sent it
    pub start_date: String,
    /// Base64 image or URL; None falls back to DEFAULT_MAIN_PHOTO_URL
    pub main_photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RelationshipRecord {
    pub fn new(start_date: String, main_photo: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_date,
            main_photo,
            created_at: Utc::now().trunc_subsecs(6),
        }
    }

    /// Record materialized when none exists yet.
    /// `main_photo` overrides the default photo URL when given.
    pub fn with_defaults(main_photo: Option<String>) -> Self {
        Self::new(
            DEFAULT_START_DATE.to_string(),
            Some(main_photo.unwrap_or_else(|| DEFAULT_MAIN_PHOTO_URL.to_string())),
        )
    }

    pub fn main_photo_or_default(&self) -> &str {
        self.main_photo.as_deref().unwrap_or(DEFAULT_MAIN_PHOTO_URL)
    }
}

/// Request body for POST /api/start-date
#[derive(Debug, Clone, Deserialize)]
pub struct StartDateRequest {
    pub start_date: String,
}

/// Response for GET /api/start-date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartDateResponse {
    pub start_date: String,
    pub main_photo: String,
}

/// Response for POST /api/start-date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartDateUpdated {
    pub start_date: String,
}

/// Request body for POST /api/main-photo
#[derive(Debug, Clone, Deserialize)]
pub struct MainPhotoRequest {
    pub image_base64: String,
}

/// Response for GET /api/main-photo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainPhotoResponse {
    pub main_photo: String,
}

impl From<&RelationshipRecord> for StartDateResponse {
    fn from(record: &RelationshipRecord) -> Self {
        Self {
            start_date: record.start_date.clone(),
            main_photo: record.main_photo_or_default().to_string(),
        }
    }
}
