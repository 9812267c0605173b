// src/db/memory.rs
// DOCUMENTATION: In-process document store
// PURPOSE: Backend for tests and database-less runs (STORE_BACKEND=memory)

use crate::db::DocumentStore;
use crate::errors::TrackerError;
use crate::models::{Photo, RelationshipRecord};
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Both collections kept in insertion order behind async locks
#[derive(Default)]
pub struct MemoryStore {
    photos: RwLock<Vec<Photo>>,
    relationship: RwLock<Vec<RelationshipRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows in the relationship collection
    #[cfg(test)]
    pub async fn relationship_count(&self) -> usize {
        self.relationship.read().await.len()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_photo(&self, photo: &Photo) -> Result<(), TrackerError> {
        self.photos.write().await.push(photo.clone());
        log::info!("Stored photo {}", photo.id);
        Ok(())
    }

    async fn list_photos(&self, limit: usize) -> Result<Vec<Photo>, TrackerError> {
        let mut photos = self.photos.read().await.clone();
        photos.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        photos.truncate(limit);
        Ok(photos)
    }

    async fn delete_photo(&self, id: Uuid) -> Result<u64, TrackerError> {
        let mut photos = self.photos.write().await;
        let before = photos.len();
        photos.retain(|p| p.id != id);
        Ok((before - photos.len()) as u64)
    }

    async fn find_relationship(&self) -> Result<Option<RelationshipRecord>, TrackerError> {
        Ok(self.relationship.read().await.first().cloned())
    }

    async fn insert_relationship(&self, record: &RelationshipRecord) -> Result<(), TrackerError> {
        self.relationship.write().await.push(record.clone());
        log::info!("Created relationship record {}", record.id);
        Ok(())
    }

    async fn replace_relationship(&self, record: &RelationshipRecord) -> Result<(), TrackerError> {
        let mut rows = self.relationship.write().await;
        let removed = rows.len();
        rows.clear();
        rows.push(record.clone());
        log::info!(
            "Replaced relationship record ({} old rows removed)",
            removed
        );
        Ok(())
    }

    async fn set_main_photo(&self, id: Uuid, main_photo: &str) -> Result<u64, TrackerError> {
        let mut rows = self.relationship.write().await;
        let mut touched = 0;
        for row in rows.iter_mut().filter(|r| r.id == id) {
            row.main_photo = Some(main_photo.to_string());
            touched += 1;
        }
        Ok(touched)
    }

    async fn close(&self) {}
}
