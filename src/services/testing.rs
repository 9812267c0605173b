// src/services/testing.rs
// Store doubles for error and race paths

use crate::db::{DocumentStore, MemoryStore};
use crate::errors::TrackerError;
use crate::models::{Photo, RelationshipRecord};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

/// Every call fails like an unreachable database
pub struct FailingStore;

fn unavailable<T>() -> Result<T, TrackerError> {
    Err(TrackerError::DatabaseError("store unavailable".to_string()))
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn insert_photo(&self, _photo: &Photo) -> Result<(), TrackerError> {
        unavailable()
    }

    async fn list_photos(&self, _limit: usize) -> Result<Vec<Photo>, TrackerError> {
        unavailable()
    }

    async fn delete_photo(&self, _id: Uuid) -> Result<u64, TrackerError> {
        unavailable()
    }

    async fn find_relationship(&self) -> Result<Option<RelationshipRecord>, TrackerError> {
        unavailable()
    }

    async fn insert_relationship(&self, _record: &RelationshipRecord) -> Result<(), TrackerError> {
        unavailable()
    }

    async fn replace_relationship(&self, _record: &RelationshipRecord) -> Result<(), TrackerError> {
        unavailable()
    }

    async fn set_main_photo(&self, _id: Uuid, _main_photo: &str) -> Result<u64, TrackerError> {
        unavailable()
    }

    async fn close(&self) {}
}

/// MemoryStore whose first `races` main photo updates lose to a
/// simultaneous start date replace: the record is swapped out just
/// before the update lands.
pub struct ReplacingStore {
    pub inner: MemoryStore,
    races: AtomicUsize,
}

impl ReplacingStore {
    pub fn new(races: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            races: AtomicUsize::new(races),
        }
    }
}

#[async_trait]
impl DocumentStore for ReplacingStore {
    async fn insert_photo(&self, photo: &Photo) -> Result<(), TrackerError> {
        self.inner.insert_photo(photo).await
    }

    async fn list_photos(&self, limit: usize) -> Result<Vec<Photo>, TrackerError> {
        self.inner.list_photos(limit).await
    }

    async fn delete_photo(&self, id: Uuid) -> Result<u64, TrackerError> {
        self.inner.delete_photo(id).await
    }

    async fn find_relationship(&self) -> Result<Option<RelationshipRecord>, TrackerError> {
        self.inner.find_relationship().await
    }

    async fn insert_relationship(&self, record: &RelationshipRecord) -> Result<(), TrackerError> {
        self.inner.insert_relationship(record).await
    }

    async fn replace_relationship(&self, record: &RelationshipRecord) -> Result<(), TrackerError> {
        self.inner.replace_relationship(record).await
    }

    async fn set_main_photo(&self, id: Uuid, main_photo: &str) -> Result<u64, TrackerError> {
        let raced = self
            .races
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if raced {
            let current = self.inner.find_relationship().await?;
            let start_date = current.map(|r| r.start_date).unwrap_or_default();
            self.inner
                .replace_relationship(&RelationshipRecord::new(start_date, None))
                .await?;
        }
        self.inner.set_main_photo(id, main_photo).await
    }

    async fn close(&self) {}
}
