// src/handlers/health.rs
// DOCUMENTATION: Health check handler
// PURPOSE: Simple endpoint to verify service status

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Relationship Tracker API"
    }))
}

/// Mounted inside the /api scope, so both /api and /api/ answer
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(health_check))
        .route("/", web::get().to(health_check));
}
