// src/services/city_service.rs
// DOCUMENTATION: Business logic for cities
// PURPOSE: Cities are created under an existing state and listed per state

use crate::db::Session;
use crate::errors::ApiError;
use crate::models::{City, CreateCityRequest, Entity, Kind, State, UpdateCityRequest};

use super::{cascade, require, validated};

pub struct CityService;

impl CityService {
    pub async fn list(session: &Session) -> Result<Vec<City>, ApiError> {
        Ok(session.all_of::<City>().await?)
    }

    /// Cities of one state, in creation order
    pub async fn list_by_state(session: &Session, state: &State) -> Result<Vec<City>, ApiError> {
        let cities = session.all_of::<City>().await?;
        Ok(cities
            .into_iter()
            .filter(|city| city.state_id == state.id())
            .collect())
    }

    pub async fn get(session: &Session, id: &str) -> Result<City, ApiError> {
        require::<City>(session, id).await
    }

    /// Create a city linked to `state`
    /// DOCUMENTATION: The caller has already resolved the state, so a city
    /// can never reference a missing parent at creation time
    pub async fn create(
        session: &mut Session,
        state: &State,
        req: CreateCityRequest,
    ) -> Result<City, ApiError> {
        let city = City::new(state.id(), validated(req)?);
        session.add(&city);
        session.save().await?;

        log::info!("Created city {} in state {}", city.id(), state.id());
        Ok(city)
    }

    pub async fn update(
        session: &mut Session,
        mut city: City,
        req: UpdateCityRequest,
    ) -> Result<City, ApiError> {
        city.apply(validated(req)?);
        session.update(&city);
        session.save().await?;

        log::info!("Updated city {}", city.id());
        Ok(city)
    }

    pub async fn delete(session: &mut Session, city: &City) -> Result<(), ApiError> {
        cascade::stage_delete(session, Kind::City, city.id()).await?;
        session.save().await?;

        log::info!("Deleted city {}", city.id());
        Ok(())
    }
}
