// src/handlers/places.rs
// DOCUMENTATION: HTTP handlers for place operations
// PURPOSE: Parse requests, call services, return responses

use crate::db::Session;
use crate::errors::ApiError;
use crate::models::Entity;
use crate::services::{CityService, PlaceService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde_json::json;

use super::extract::{decode, json_object, require_fields};
use super::to_dicts;

/// GET /cities/{city_id}/places
pub async fn list_city_places(
    session: Session,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let city = CityService::get(&session, &path.into_inner()).await?;
    let places = PlaceService::list_by_city(&session, &city).await?;
    Ok(HttpResponse::Ok().json(to_dicts(&places)))
}

/// GET /places/{place_id}
pub async fn get_place(
    session: Session,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let place = PlaceService::get(&session, &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(place.to_dict()))
}

/// POST /cities/{city_id}/places
/// Create a new place owned by `user_id`
pub async fn create_place(
    mut session: Session,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<impl Responder, ApiError> {
    let city = CityService::get(&session, &path.into_inner()).await?;

    let body = json_object(&req, &body)?;
    require_fields(&body, &["user_id", "name"])?;

    let place = PlaceService::create(&mut session, &city, decode(body)?).await?;
    Ok(HttpResponse::Created().json(place.to_dict()))
}

/// PUT /places/{place_id}
/// Update a place; city, owner, id and timestamps never change
pub async fn update_place(
    mut session: Session,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<impl Responder, ApiError> {
    let place = PlaceService::get(&session, &path.into_inner()).await?;
    let body = json_object(&req, &body)?;

    let place = PlaceService::update(&mut session, place, decode(body)?).await?;
    Ok(HttpResponse::Ok().json(place.to_dict()))
}

/// DELETE /places/{place_id}
/// Hard delete, reviews of the place included
pub async fn delete_place(
    mut session: Session,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let place = PlaceService::get(&session, &path.into_inner()).await?;
    PlaceService::delete(&mut session, &place).await?;
    Ok(HttpResponse::Ok().json(json!({})))
}

/// Configuration for place routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/cities/{city_id}/places")
            .route(web::get().to(list_city_places))
            .route(web::post().to(create_place)),
    )
    .service(
        web::resource("/places/{place_id}")
            .route(web::get().to(get_place))
            .route(web::put().to(update_place))
            .route(web::delete().to(delete_place)),
    );
}
