// src/handlers/cities.rs
// DOCUMENTATION: HTTP handlers for city operations
// PURPOSE: Cities are listed globally or per state and created under a state

use crate::db::Session;
use crate::errors::ApiError;
use crate::models::Entity;
use crate::services::{CityService, StateService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde_json::json;

use super::extract::{decode, json_object, require_fields};
use super::to_dicts;

/// GET /cities
pub async fn list_cities(session: Session) -> Result<impl Responder, ApiError> {
    let cities = CityService::list(&session).await?;
    Ok(HttpResponse::Ok().json(to_dicts(&cities)))
}

/// GET /states/{state_id}/cities
pub async fn list_state_cities(
    session: Session,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let state = StateService::get(&session, &path.into_inner()).await?;
    let cities = CityService::list_by_state(&session, &state).await?;
    Ok(HttpResponse::Ok().json(to_dicts(&cities)))
}

/// GET /cities/{city_id}
pub async fn get_city(
    session: Session,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let city = CityService::get(&session, &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(city.to_dict()))
}

/// POST /states/{state_id}/cities
/// Unknown state is a 404 before the body is looked at
pub async fn create_city(
    mut session: Session,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<impl Responder, ApiError> {
    let state = StateService::get(&session, &path.into_inner()).await?;

    let body = json_object(&req, &body)?;
    require_fields(&body, &["name"])?;

    let city = CityService::create(&mut session, &state, decode(body)?).await?;
    Ok(HttpResponse::Created().json(city.to_dict()))
}

/// PUT /cities/{city_id}
pub async fn update_city(
    mut session: Session,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<impl Responder, ApiError> {
    let city = CityService::get(&session, &path.into_inner()).await?;
    let body = json_object(&req, &body)?;

    let city = CityService::update(&mut session, city, decode(body)?).await?;
    Ok(HttpResponse::Ok().json(city.to_dict()))
}

/// DELETE /cities/{city_id}
pub async fn delete_city(
    mut session: Session,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let city = CityService::get(&session, &path.into_inner()).await?;
    CityService::delete(&mut session, &city).await?;
    Ok(HttpResponse::Ok().json(json!({})))
}

/// Configuration for city routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/cities").route(web::get().to(list_cities)))
        .service(
            web::resource("/states/{state_id}/cities")
                .route(web::get().to(list_state_cities))
                .route(web::post().to(create_city)),
        )
        .service(
            web::resource("/cities/{city_id}")
                .route(web::get().to(get_city))
                .route(web::put().to(update_city))
                .route(web::delete().to(delete_city)),
        );
}
