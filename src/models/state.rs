// src/models/state.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::BaseModel;

/// A state; owns its cities through `City::state_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct State {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: BaseModel,
    pub name: String,
}

/// Body of POST /states
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStateRequest {
    #[validate(length(max = 128))]
    pub name: String,
}

/// Body of PUT /states/{id}
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStateRequest {
    #[validate(length(max = 128))]
    pub name: Option<String>,
}

impl State {
    pub fn new(req: CreateStateRequest) -> Self {
        State {
            base: BaseModel::new(),
            name: req.name,
        }
    }

    pub fn apply(&mut self, req: UpdateStateRequest) {
        if let Some(name) = req.name {
            self.name = name;
        }
    }
}
