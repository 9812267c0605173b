// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components and assemble the /api route table

pub mod health;
pub mod photos;
pub mod relationship;

use crate::errors::TrackerError;
use actix_web::error::JsonPayloadError;
use actix_web::web;

pub use health::config as health_config;
pub use photos::config as photos_config;
pub use relationship::config as relationship_config;

/// Base64 photos are large; allow bodies well past actix's 2 MiB default
pub const JSON_PAYLOAD_LIMIT: usize = 32 * 1024 * 1024;

/// JSON extractor settings: raised size limit, and rejected bodies
/// rendered through TrackerError like every other failure.
///
/// Bodies that fail to deserialize (bad JSON, missing field, wrong type)
/// are 422, the status the mobile client was built against.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(|err, _req| {
            log::debug!("Rejected JSON body: {}", err);
            json_error(err).into()
        })
}

fn json_error(err: JsonPayloadError) -> TrackerError {
    match err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            TrackerError::PayloadTooLarge(err.to_string())
        }
        JsonPayloadError::Deserialize(_) => TrackerError::ValidationError(err.to_string()),
        _ => TrackerError::BadRequest(err.to_string()),
    }
}

/// Every endpoint, mounted under /api
pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(health_config)
            .configure(photos_config)
            .configure(relationship_config),
    );
}
