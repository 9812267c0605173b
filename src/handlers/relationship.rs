// src/handlers/relationship.rs
// DOCUMENTATION: HTTP handlers for the start date and main photo
// PURPOSE: Parse requests, call services, return responses

use crate::db::DocumentStore;
use crate::errors::TrackerError;
use crate::models::{MainPhotoRequest, StartDateRequest};
use crate::services::RelationshipService;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// GET /api/start-date
pub async fn get_start_date(
    store: web::Data<dyn DocumentStore>,
) -> Result<impl Responder, TrackerError> {
    let response = RelationshipService::get_start_date(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// POST /api/start-date
pub async fn set_start_date(
    store: web::Data<dyn DocumentStore>,
    req: web::Json<StartDateRequest>,
) -> Result<impl Responder, TrackerError> {
    let response = RelationshipService::set_start_date(store.get_ref(), req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// POST /api/main-photo
pub async fn update_main_photo(
    store: web::Data<dyn DocumentStore>,
    req: web::Json<MainPhotoRequest>,
) -> Result<impl Responder, TrackerError> {
    RelationshipService::update_main_photo(store.get_ref(), req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Main photo updated successfully" })))
}

/// GET /api/main-photo
pub async fn get_main_photo(
    store: web::Data<dyn DocumentStore>,
) -> Result<impl Responder, TrackerError> {
    let response = RelationshipService::get_main_photo(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/start-date", web::get().to(get_start_date))
        .route("/start-date", web::post().to(set_start_date))
        .route("/main-photo", web::post().to(update_main_photo))
        .route("/main-photo", web::get().to(get_main_photo));
}
