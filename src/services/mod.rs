// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod photo_service;
pub mod relationship_service;

#[cfg(test)]
pub mod testing;

pub use photo_service::*;
pub use relationship_service::*;
