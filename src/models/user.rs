// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::BaseModel;

/// Registered user; owner of places and author of reviews
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: BaseModel,

    /// Login email, fixed at creation
    pub email: String,

    pub password: String,

    pub first_name: Option<String>,

    pub last_name: Option<String>,
}

/// Body of POST /users
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(max = 128))]
    pub email: String,
    #[validate(length(max = 128))]
    pub password: String,
    #[validate(length(max = 128))]
    pub first_name: Option<String>,
    #[validate(length(max = 128))]
    pub last_name: Option<String>,
}

/// Body of PUT /users/{id}
/// DOCUMENTATION: `email` is deliberately absent, a user's email never changes.
/// Names use a double option: absent leaves the value, `null` clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(max = 128))]
    pub password: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 128))]
    pub first_name: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 128))]
    pub last_name: Option<Option<String>>,
}

impl User {
    pub fn new(req: CreateUserRequest) -> Self {
        User {
            base: BaseModel::new(),
            email: req.email,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }

    pub fn apply(&mut self, req: UpdateUserRequest) {
        if let Some(password) = req.password {
            self.password = password;
        }
        if let Some(first_name) = req.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = req.last_name {
            self.last_name = last_name;
        }
    }
}
