// src/db/store.rs
// DOCUMENTATION: Document store abstraction
// PURPOSE: One interface over the `photos` and `relationship` collections

use crate::errors::TrackerError;
use crate::models::{Photo, RelationshipRecord};
use async_trait::async_trait;
use uuid::Uuid;

/// Operations the data service needs from its backing store.
///
/// Each method is a single store operation; callers compose them.
/// Implementations must be safe to share across actix workers.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a new photo as-is
    async fn insert_photo(&self, photo: &Photo) -> Result<(), TrackerError>;

    /// Photos ordered by `uploaded_at` descending, at most `limit` of them
    async fn list_photos(&self, limit: usize) -> Result<Vec<Photo>, TrackerError>;

    /// Delete one photo, returning how many rows were removed (0 or 1)
    async fn delete_photo(&self, id: Uuid) -> Result<u64, TrackerError>;

    /// First relationship record, if any
    async fn find_relationship(&self) -> Result<Option<RelationshipRecord>, TrackerError>;

    async fn insert_relationship(&self, record: &RelationshipRecord) -> Result<(), TrackerError>;

    /// Drop every relationship row and insert `record` in their place.
    /// Fields of the old rows (including `main_photo`) are not carried over.
    async fn replace_relationship(&self, record: &RelationshipRecord) -> Result<(), TrackerError>;

    /// Set `main_photo` on the record with this id, returning rows touched
    async fn set_main_photo(&self, id: Uuid, main_photo: &str) -> Result<u64, TrackerError>;

    /// Release backend resources. Called once at shutdown.
    async fn close(&self);
}
