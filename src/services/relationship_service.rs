// src/services/relationship_service.rs
// DOCUMENTATION: Business logic for the singleton relationship record
// PURPOSE: Start date and main photo reads/writes with lazy creation

use crate::db::DocumentStore;
use crate::errors::TrackerError;
use crate::models::{
    MainPhotoRequest, MainPhotoResponse, RelationshipRecord, StartDateRequest,
    StartDateResponse, StartDateUpdated, DEFAULT_MAIN_PHOTO_URL,
};

/// Lookups tried before giving up on a main photo update
const MAIN_PHOTO_UPDATE_ATTEMPTS: usize = 3;

pub struct RelationshipService;

impl RelationshipService {
    /// Fetch the singleton record, creating it from defaults when absent.
    ///
    /// `seed_main_photo` replaces the default photo URL on creation only.
    /// Returns the record and whether it was just created.
    pub async fn get_or_create_relationship(
        store: &dyn DocumentStore,
        seed_main_photo: Option<String>,
    ) -> Result<(RelationshipRecord, bool), TrackerError> {
        if let Some(record) = store.find_relationship().await? {
            return Ok((record, false));
        }

        let record = RelationshipRecord::with_defaults(seed_main_photo);
        store.insert_relationship(&record).await?;
        Ok((record, true))
    }

    /// GET /api/start-date
    pub async fn get_start_date(
        store: &dyn DocumentStore,
    ) -> Result<StartDateResponse, TrackerError> {
        let (record, _) = Self::get_or_create_relationship(store, None).await?;
        Ok(StartDateResponse::from(&record))
    }

    /// POST /api/start-date
    ///
    /// Replaces the whole record. A previously set main photo is dropped
    /// and reads fall back to the default URL afterwards.
    pub async fn set_start_date(
        store: &dyn DocumentStore,
        req: StartDateRequest,
    ) -> Result<StartDateUpdated, TrackerError> {
        let record = RelationshipRecord::new(req.start_date, None);
        store.replace_relationship(&record).await?;

        Ok(StartDateUpdated {
            start_date: record.start_date,
        })
    }

    /// POST /api/main-photo
    ///
    /// A concurrent set-start-date can replace the record between the
    /// lookup and the update, leaving nothing to update. The lookup is
    /// then repeated against the new record.
    pub async fn update_main_photo(
        store: &dyn DocumentStore,
        req: MainPhotoRequest,
    ) -> Result<(), TrackerError> {
        for attempt in 1..=MAIN_PHOTO_UPDATE_ATTEMPTS {
            let (record, created) =
                Self::get_or_create_relationship(store, Some(req.image_base64.clone())).await?;

            if created || store.set_main_photo(record.id, &req.image_base64).await? > 0 {
                log::info!("Main photo updated on record {}", record.id);
                return Ok(());
            }

            log::warn!(
                "Relationship record {} replaced during main photo update (attempt {})",
                record.id,
                attempt
            );
        }

        Err(TrackerError::DatabaseError(
            "relationship record kept changing during main photo update".to_string(),
        ))
    }

    /// GET /api/main-photo. Never creates a record.
    pub async fn get_main_photo(
        store: &dyn DocumentStore,
    ) -> Result<MainPhotoResponse, TrackerError> {
        let main_photo = match store.find_relationship().await? {
            Some(record) => record.main_photo_or_default().to_string(),
            None => DEFAULT_MAIN_PHOTO_URL.to_string(),
        };

        Ok(MainPhotoResponse { main_photo })
    }
}
