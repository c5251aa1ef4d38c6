// src/handlers/amenities.rs

use crate::db::Session;
use crate::errors::ApiError;
use crate::models::Entity;
use crate::services::AmenityService;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde_json::json;

use super::extract::{decode, json_object, require_fields};
use super::to_dicts;

/// GET /amenities
pub async fn list_amenities(session: Session) -> Result<impl Responder, ApiError> {
    let amenities = AmenityService::list(&session).await?;
    Ok(HttpResponse::Ok().json(to_dicts(&amenities)))
}

/// GET /amenities/{amenity_id}
pub async fn get_amenity(
    session: Session,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let amenity = AmenityService::get(&session, &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(amenity.to_dict()))
}

/// POST /amenities
pub async fn create_amenity(
    mut session: Session,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<impl Responder, ApiError> {
    let body = json_object(&req, &body)?;
    require_fields(&body, &["name"])?;

    let amenity = AmenityService::create(&mut session, decode(body)?).await?;
    Ok(HttpResponse::Created().json(amenity.to_dict()))
}

/// PUT /amenities/{amenity_id}
pub async fn update_amenity(
    mut session: Session,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<impl Responder, ApiError> {
    let amenity = AmenityService::get(&session, &path.into_inner()).await?;
    let body = json_object(&req, &body)?;

    let amenity = AmenityService::update(&mut session, amenity, decode(body)?).await?;
    Ok(HttpResponse::Ok().json(amenity.to_dict()))
}

/// DELETE /amenities/{amenity_id}
pub async fn delete_amenity(
    mut session: Session,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let amenity = AmenityService::get(&session, &path.into_inner()).await?;
    AmenityService::delete(&mut session, &amenity).await?;
    Ok(HttpResponse::Ok().json(json!({})))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/amenities")
            .route(web::get().to(list_amenities))
            .route(web::post().to(create_amenity)),
    )
    .service(
        web::resource("/amenities/{amenity_id}")
            .route(web::get().to(get_amenity))
            .route(web::put().to(update_amenity))
            .route(web::delete().to(delete_amenity)),
    );
}

#[cfg(test)]
mod tests {
    use crate::app;
    use crate::test_support::{self, call_json, created_id};
    use actix_web::http::StatusCode;
    use actix_web::test::{self, TestRequest};
    use serde_json::json;

    #[actix_rt::test]
    async fn test_amenity_crud() {
        let (_dir, storage) = test_support::storage();
        let app = test::init_service(app::build(storage)).await;

        let id = created_id!(app, "/api/v1/amenities", json!({ "name": "Wifi" }));
        let uri = format!("/api/v1/amenities/{}", id);

        let (status, updated) = call_json!(
            app,
            TestRequest::put().uri(&uri).set_json(json!({ "name": "Fast wifi" }))
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "Fast wifi");
        assert_eq!(updated["__class__"], "Amenity");

        let (_, listed) = call_json!(app, TestRequest::get().uri("/api/v1/amenities"));
        assert_eq!(listed, json!([updated]));

        let (status, body) = call_json!(app, TestRequest::delete().uri(&uri));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));

        let (status, _) = call_json!(app, TestRequest::delete().uri(&uri));
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
