// src/services/amenity_service.rs

use crate::db::Session;
use crate::errors::ApiError;
use crate::models::{Amenity, CreateAmenityRequest, Entity, UpdateAmenityRequest};

use super::{require, validated};

pub struct AmenityService;

impl AmenityService {
    pub async fn list(session: &Session) -> Result<Vec<Amenity>, ApiError> {
        Ok(session.all_of::<Amenity>().await?)
    }

    pub async fn get(session: &Session, id: &str) -> Result<Amenity, ApiError> {
        require::<Amenity>(session, id).await
    }

    pub async fn create(
        session: &mut Session,
        req: CreateAmenityRequest,
    ) -> Result<Amenity, ApiError> {
        let amenity = Amenity::new(validated(req)?);
        session.add(&amenity);
        session.save().await?;

        log::info!("Created amenity {} ({})", amenity.id(), amenity.name);
        Ok(amenity)
    }

    pub async fn update(
        session: &mut Session,
        mut amenity: Amenity,
        req: UpdateAmenityRequest,
    ) -> Result<Amenity, ApiError> {
        amenity.apply(validated(req)?);
        session.update(&amenity);
        session.save().await?;

        log::info!("Updated amenity {}", amenity.id());
        Ok(amenity)
    }

    pub async fn delete(session: &mut Session, amenity: &Amenity) -> Result<(), ApiError> {
        session.delete(amenity);
        session.save().await?;

        log::info!("Deleted amenity {}", amenity.id());
        Ok(())
    }
}
