// src/services/place_service.rs
// DOCUMENTATION: Business logic for places
// PURPOSE: Intermediary between handlers and storage, checks owner and field rules

use crate::db::Session;
use crate::errors::ApiError;
use crate::models::{City, CreatePlaceRequest, Entity, Kind, Place, UpdatePlaceRequest, User};

use super::{cascade, require, validated};

pub struct PlaceService;

impl PlaceService {
    /// Places listed in one city
    pub async fn list_by_city(session: &Session, city: &City) -> Result<Vec<Place>, ApiError> {
        let places = session.all_of::<Place>().await?;
        Ok(places
            .into_iter()
            .filter(|place| place.city_id == city.id())
            .collect())
    }

    pub async fn get(session: &Session, id: &str) -> Result<Place, ApiError> {
        require::<Place>(session, id).await
    }

    /// Create a new place in `city`
    /// DOCUMENTATION: The owner named by `user_id` must exist (404 otherwise);
    /// numeric fields are validated after the owner lookup
    pub async fn create(
        session: &mut Session,
        city: &City,
        req: CreatePlaceRequest,
    ) -> Result<Place, ApiError> {
        require::<User>(session, &req.user_id).await?;
        let req = validated(req)?;

        let place = Place::new(city.id(), req);
        session.add(&place);
        session.save().await?;

        log::info!(
            "Created place {} in city {} for user {}",
            place.id(),
            city.id(),
            place.user_id
        );
        Ok(place)
    }

    /// Update a place
    pub async fn update(
        session: &mut Session,
        mut place: Place,
        req: UpdatePlaceRequest,
    ) -> Result<Place, ApiError> {
        place.apply(validated(req)?);
        session.update(&place);
        session.save().await?;

        log::info!("Updated place {}", place.id());
        Ok(place)
    }

    /// Delete a place and its reviews
    pub async fn delete(session: &mut Session, place: &Place) -> Result<(), ApiError> {
        cascade::stage_delete(session, Kind::Place, place.id()).await?;
        session.save().await?;

        log::info!("Deleted place {}", place.id());
        Ok(())
    }
}
