// src/handlers/photos.rs
// DOCUMENTATION: HTTP handlers for photo operations
// PURPOSE: Parse requests, call services, return responses

use crate::db::DocumentStore;
use crate::errors::TrackerError;
use crate::models::PhotoUpload;
use crate::services::PhotoService;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// POST /api/photos
pub async fn upload_photo(
    store: web::Data<dyn DocumentStore>,
    req: web::Json<PhotoUpload>,
) -> Result<impl Responder, TrackerError> {
    let photo = PhotoService::upload_photo(store.get_ref(), req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(photo))
}

/// GET /api/photos
pub async fn list_photos(
    store: web::Data<dyn DocumentStore>,
) -> Result<impl Responder, TrackerError> {
    let photos = PhotoService::list_photos(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(photos))
}

/// DELETE /api/photos/{photo_id}
/// The id stays a raw string so malformed ids reach the service and
/// come back as 400 instead of a routing error
pub async fn delete_photo(
    store: web::Data<dyn DocumentStore>,
    path: web::Path<String>,
) -> Result<impl Responder, TrackerError> {
    let photo_id = path.into_inner();
    PhotoService::delete_photo(store.get_ref(), &photo_id).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Photo deleted successfully" })))
}

/// Configuration for photo routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/photos")
            .route("", web::post().to(upload_photo))
            .route("", web::get().to(list_photos))
            // `.*` lets an empty id through to the handler
            .route("/{photo_id:.*}", web::delete().to(delete_photo)),
    );
}
