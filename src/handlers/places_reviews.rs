// src/handlers/places_reviews.rs
// DOCUMENTATION: HTTP handlers for reviews, nested under their place
// PURPOSE: Parse requests, call ReviewService, return responses

use crate::db::Session;
use crate::errors::ApiError;
use crate::models::Entity;
use crate::services::{PlaceService, ReviewService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde_json::json;

use super::extract::{decode, json_object, require_fields};
use super::to_dicts;

/// GET /places/{place_id}/reviews
pub async fn list_place_reviews(
    session: Session,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let place = PlaceService::get(&session, &path.into_inner()).await?;
    let reviews = ReviewService::list_by_place(&session, &place).await?;
    Ok(HttpResponse::Ok().json(to_dicts(&reviews)))
}

/// GET /reviews/{review_id}
pub async fn get_review(
    session: Session,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let review = ReviewService::get(&session, &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(review.to_dict()))
}

/// POST /places/{place_id}/reviews
pub async fn create_review(
    mut session: Session,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<impl Responder, ApiError> {
    let place = PlaceService::get(&session, &path.into_inner()).await?;

    let body = json_object(&req, &body)?;
    require_fields(&body, &["user_id", "text"])?;

    let review = ReviewService::create(&mut session, &place, decode(body)?).await?;
    Ok(HttpResponse::Created().json(review.to_dict()))
}

/// PUT /reviews/{review_id}
/// Only `text` is applied
pub async fn update_review(
    mut session: Session,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<impl Responder, ApiError> {
    let review = ReviewService::get(&session, &path.into_inner()).await?;
    let body = json_object(&req, &body)?;

    let review = ReviewService::update(&mut session, review, decode(body)?).await?;
    Ok(HttpResponse::Ok().json(review.to_dict()))
}

/// DELETE /reviews/{review_id}
pub async fn delete_review(
    mut session: Session,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let review = ReviewService::get(&session, &path.into_inner()).await?;
    ReviewService::delete(&mut session, &review).await?;
    Ok(HttpResponse::Ok().json(json!({})))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/places/{place_id}/reviews")
            .route(web::get().to(list_place_reviews))
            .route(web::post().to(create_review)),
    )
    .service(
        web::resource("/reviews/{review_id}")
            .route(web::get().to(get_review))
            .route(web::put().to(update_review))
            .route(web::delete().to(delete_review)),
    );
}
