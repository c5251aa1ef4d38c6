// src/models/amenity.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::BaseModel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Amenity {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: BaseModel,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAmenityRequest {
    #[validate(length(max = 128))]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAmenityRequest {
    #[validate(length(max = 128))]
    pub name: Option<String>,
}

impl Amenity {
    pub fn new(req: CreateAmenityRequest) -> Self {
        Amenity {
            base: BaseModel::new(),
            name: req.name,
        }
    }

    pub fn apply(&mut self, req: UpdateAmenityRequest) {
        if let Some(name) = req.name {
            self.name = name;
        }
    }
}
