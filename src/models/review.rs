// src/models/review.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::BaseModel;

/// A user's review of a place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Review {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: BaseModel,
    pub place_id: String,
    pub user_id: String,
    pub text: String,
}

/// Body of POST /places/{place_id}/reviews
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReviewRequest {
    pub user_id: String,
    #[validate(length(max = 1024))]
    pub text: String,
}

/// Body of PUT /reviews/{id}
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    #[validate(length(max = 1024))]
    pub text: Option<String>,
}

impl Review {
    pub fn new(place_id: &str, req: CreateReviewRequest) -> Self {
        Review {
            base: BaseModel::new(),
            place_id: place_id.to_string(),
            user_id: req.user_id,
            text: req.text,
        }
    }

    pub fn apply(&mut self, req: UpdateReviewRequest) {
        if let Some(text) = req.text {
            self.text = text;
        }
    }
}
