// src/services/photo_service.rs
// DOCUMENTATION: Business logic for photos
// PURPOSE: Intermediary between handlers and the document store

use crate::db::DocumentStore;
use crate::errors::TrackerError;
use crate::models::{Photo, PhotoUpload};
use uuid::Uuid;

/// Most photos a single listing returns
pub const PHOTO_LIST_LIMIT: usize = 1000;

pub struct PhotoService;

impl PhotoService {
    /// Store a new photo, stamped with the server time
    pub async fn upload_photo(
        store: &dyn DocumentStore,
        req: PhotoUpload,
    ) -> Result<Photo, TrackerError> {
        let photo = Photo::new(req.image_base64);
        store.insert_photo(&photo).await?;
        Ok(photo)
    }

    /// Most recent photos first
    pub async fn list_photos(store: &dyn DocumentStore) -> Result<Vec<Photo>, TrackerError> {
        store.list_photos(PHOTO_LIST_LIMIT).await
    }

    /// Delete a photo by its string id.
    ///
    /// A malformed id and a failing delete both surface as BadRequest;
    /// only a well-formed id that matches nothing is NotFound.
    pub async fn delete_photo(store: &dyn DocumentStore, photo_id: &str) -> Result<(), TrackerError> {
        let id = Uuid::parse_str(photo_id).map_err(|e| {
            log::warn!("Rejected delete for malformed photo id '{}': {}", photo_id, e);
            TrackerError::BadRequest(format!("'{}' is not a valid photo id: {}", photo_id, e))
        })?;

        let deleted = store
            .delete_photo(id)
            .await
            .map_err(|e| TrackerError::BadRequest(e.to_string()))?;

        if deleted == 0 {
            return Err(TrackerError::NotFound("Photo not found".to_string()));
        }

        log::info!("Deleted photo {}", id);
        Ok(())
    }
}
