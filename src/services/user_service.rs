// src/services/user_service.rs
// DOCUMENTATION: Business logic for users
// PURPOSE: Intermediary between user handlers and the storage session

use crate::db::Session;
use crate::errors::ApiError;
use crate::models::{CreateUserRequest, Entity, Kind, UpdateUserRequest, User};

use super::{cascade, require, validated};

pub struct UserService;

impl UserService {
    pub async fn list(session: &Session) -> Result<Vec<User>, ApiError> {
        Ok(session.all_of::<User>().await?)
    }

    pub async fn get(session: &Session, id: &str) -> Result<User, ApiError> {
        require::<User>(session, id).await
    }

    /// Create a user
    /// DOCUMENTATION: Email uniqueness is not enforced
    pub async fn create(session: &mut Session, req: CreateUserRequest) -> Result<User, ApiError> {
        let user = User::new(validated(req)?);
        session.add(&user);
        session.save().await?;

        log::info!("Created user {}", user.id());
        Ok(user)
    }

    pub async fn update(
        session: &mut Session,
        mut user: User,
        req: UpdateUserRequest,
    ) -> Result<User, ApiError> {
        user.apply(validated(req)?);
        session.update(&user);
        session.save().await?;

        log::info!("Updated user {}", user.id());
        Ok(user)
    }

    /// Delete a user with the places they own and the reviews they wrote
    pub async fn delete(session: &mut Session, user: &User) -> Result<(), ApiError> {
        cascade::stage_delete(session, Kind::User, user.id()).await?;
        session.save().await?;

        log::info!("Deleted user {}", user.id());
        Ok(())
    }
}
