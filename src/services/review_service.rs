// src/services/review_service.rs
// DOCUMENTATION: Review business logic
// PURPOSE: Reviews hang off a place and must name an existing author

use crate::db::Session;
use crate::errors::ApiError;
use crate::models::{CreateReviewRequest, Entity, Place, Review, UpdateReviewRequest, User};

use super::{require, validated};

pub struct ReviewService;

impl ReviewService {
    /// Reviews of one place, oldest first
    pub async fn list_by_place(session: &Session, place: &Place) -> Result<Vec<Review>, ApiError> {
        let reviews = session.all_of::<Review>().await?;
        Ok(reviews
            .into_iter()
            .filter(|review| review.place_id == place.id())
            .collect())
    }

    pub async fn get(session: &Session, id: &str) -> Result<Review, ApiError> {
        require::<Review>(session, id).await
    }

    /// Create a review of `place`
    /// DOCUMENTATION: 404 when `user_id` does not resolve to a stored user
    pub async fn create(
        session: &mut Session,
        place: &Place,
        req: CreateReviewRequest,
    ) -> Result<Review, ApiError> {
        require::<User>(session, &req.user_id).await?;
        let req = validated(req)?;

        let review = Review::new(place.id(), req);
        session.add(&review);
        session.save().await?;

        log::info!(
            "Created review {} of place {} by user {}",
            review.id(),
            place.id(),
            review.user_id
        );
        Ok(review)
    }

    pub async fn update(
        session: &mut Session,
        mut review: Review,
        req: UpdateReviewRequest,
    ) -> Result<Review, ApiError> {
        review.apply(validated(req)?);
        session.update(&review);
        session.save().await?;

        log::info!("Updated review {}", review.id());
        Ok(review)
    }

    pub async fn delete(session: &mut Session, review: &Review) -> Result<(), ApiError> {
        session.delete(review);
        session.save().await?;

        log::info!("Deleted review {}", review.id());
        Ok(())
    }
}
