// src/db/postgres.rs
// DOCUMENTATION: PostgreSQL document store
// PURPOSE: Collections backed by the `photos` and `relationship` tables

use crate::db::DocumentStore;
use crate::errors::TrackerError;
use crate::models::{Photo, RelationshipRecord};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(action: &'static str) -> impl Fn(sqlx::Error) -> TrackerError {
    move |e| {
        log::error!("Failed to {}: {}", action, e);
        TrackerError::DatabaseError(format!("{} failed: {}", action, e))
    }
}

#[async_trait]
impl DocumentStore for PostgresStore {
    async fn insert_photo(&self, photo: &Photo) -> Result<(), TrackerError> {
        sqlx::query(
            r#"
            INSERT INTO photos (id, image_base64, uploaded_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(photo.id)
        .bind(&photo.image_base64)
        .bind(photo.uploaded_at)
        .execute(&self.pool)
        .await
        .map_err(database_error("insert photo"))?;

        log::info!("Stored photo {}", photo.id);
        Ok(())
    }

    async fn list_photos(&self, limit: usize) -> Result<Vec<Photo>, TrackerError> {
        let photos = sqlx::query_as::<_, Photo>(
            r#"
            SELECT id, image_base64, uploaded_at FROM photos
            ORDER BY uploaded_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("list photos"))?;

        log::debug!("Fetched {} photos", photos.len());
        Ok(photos)
    }

    async fn delete_photo(&self, id: Uuid) -> Result<u64, TrackerError> {
        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error("delete photo"))?;

        Ok(result.rows_affected())
    }

    async fn find_relationship(&self) -> Result<Option<RelationshipRecord>, TrackerError> {
        // Oldest row wins if a race ever left more than one behind
        sqlx::query_as::<_, RelationshipRecord>(
            r#"
            SELECT id, start_date, main_photo, created_at FROM relationship
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error("find relationship"))
    }

    async fn insert_relationship(&self, record: &RelationshipRecord) -> Result<(), TrackerError> {
        sqlx::query(
            r#"
            INSERT INTO relationship (id, start_date, main_photo, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(record.id)
        .bind(&record.start_date)
        .bind(&record.main_photo)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(database_error("insert relationship"))?;

        log::info!("Created relationship record {}", record.id);
        Ok(())
    }

    async fn replace_relationship(&self, record: &RelationshipRecord) -> Result<(), TrackerError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(database_error("begin relationship replace"))?;

        let removed = sqlx::query("DELETE FROM relationship")
            .execute(&mut *tx)
            .await
            .map_err(database_error("clear relationship"))?
            .rows_affected();

        sqlx::query(
            r#"
            INSERT INTO relationship (id, start_date, main_photo, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(record.id)
        .bind(&record.start_date)
        .bind(&record.main_photo)
        .bind(record.created_at)
        .execute(&mut *tx)
        .await
        .map_err(database_error("insert relationship"))?;

        tx.commit()
            .await
            .map_err(database_error("commit relationship replace"))?;

        log::info!(
            "Replaced relationship record ({} old rows removed)",
            removed
        );
        Ok(())
    }

    async fn set_main_photo(&self, id: Uuid, main_photo: &str) -> Result<u64, TrackerError> {
        let result = sqlx::query("UPDATE relationship SET main_photo = $1 WHERE id = $2")
            .bind(main_photo)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error("update main photo"))?;

        Ok(result.rows_affected())
    }

    async fn close(&self) {
        log::info!("Closing database pool");
        self.pool.close().await;
    }
}
