// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod amenity_service;
pub mod cascade;
pub mod city_service;
pub mod place_service;
pub mod review_service;
pub mod state_service;
pub mod stats_service;
pub mod user_service;

pub use amenity_service::*;
pub use city_service::*;
pub use place_service::*;
pub use review_service::*;
pub use state_service::*;
pub use stats_service::*;
pub use user_service::*;

use crate::db::Session;
use crate::errors::ApiError;
use crate::models::Entity;
use validator::Validate;

/// Load an entity by id, or `ApiError::NotFound`
async fn require<E: Entity>(session: &Session, id: &str) -> Result<E, ApiError> {
    session.find::<E>(id).await?.ok_or_else(|| {
        log::debug!("{} not found: {}", E::KIND, id);
        ApiError::NotFound
    })
}

/// Run the DTO's field rules, `ApiError::ValidationError` on failure
fn validated<T: Validate>(req: T) -> Result<T, ApiError> {
    req.validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;
    Ok(req)
}
