// src/services/state_service.rs
// DOCUMENTATION: Business logic for states
// PURPOSE: Intermediary between state handlers and the storage session

use crate::db::Session;
use crate::errors::ApiError;
use crate::models::{CreateStateRequest, Entity, Kind, State, UpdateStateRequest};

use super::{cascade, require, validated};

pub struct StateService;

impl StateService {
    pub async fn list(session: &Session) -> Result<Vec<State>, ApiError> {
        Ok(session.all_of::<State>().await?)
    }

    pub async fn get(session: &Session, id: &str) -> Result<State, ApiError> {
        require::<State>(session, id).await
    }

    pub async fn create(session: &mut Session, req: CreateStateRequest) -> Result<State, ApiError> {
        let state = State::new(validated(req)?);
        session.add(&state);
        session.save().await?;

        log::info!("Created state {} ({})", state.id(), state.name);
        Ok(state)
    }

    pub async fn update(
        session: &mut Session,
        mut state: State,
        req: UpdateStateRequest,
    ) -> Result<State, ApiError> {
        state.apply(validated(req)?);
        session.update(&state);
        session.save().await?;

        log::info!("Updated state {}", state.id());
        Ok(state)
    }

    /// Delete a state together with its cities (and their places and reviews)
    pub async fn delete(session: &mut Session, state: &State) -> Result<(), ApiError> {
        cascade::stage_delete(session, Kind::State, state.id()).await?;
        session.save().await?;

        log::info!("Deleted state {}", state.id());
        Ok(())
    }
}
