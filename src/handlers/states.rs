// src/handlers/states.rs
// DOCUMENTATION: HTTP handlers for state operations

use crate::db::Session;
use crate::errors::ApiError;
use crate::models::Entity;
use crate::services::StateService;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde_json::json;

use super::extract::{decode, json_object, require_fields};
use super::to_dicts;

/// GET /states
pub async fn list_states(session: Session) -> Result<impl Responder, ApiError> {
    let states = StateService::list(&session).await?;
    Ok(HttpResponse::Ok().json(to_dicts(&states)))
}

/// GET /states/{state_id}
pub async fn get_state(
    session: Session,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let state = StateService::get(&session, &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(state.to_dict()))
}

/// POST /states
pub async fn create_state(
    mut session: Session,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<impl Responder, ApiError> {
    let body = json_object(&req, &body)?;
    require_fields(&body, &["name"])?;

    let state = StateService::create(&mut session, decode(body)?).await?;
    Ok(HttpResponse::Created().json(state.to_dict()))
}

/// PUT /states/{state_id}
pub async fn update_state(
    mut session: Session,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<impl Responder, ApiError> {
    let state = StateService::get(&session, &path.into_inner()).await?;
    let body = json_object(&req, &body)?;

    let state = StateService::update(&mut session, state, decode(body)?).await?;
    Ok(HttpResponse::Ok().json(state.to_dict()))
}

/// DELETE /states/{state_id}
/// Cities of the state (and their places and reviews) go with it
pub async fn delete_state(
    mut session: Session,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let state = StateService::get(&session, &path.into_inner()).await?;
    StateService::delete(&mut session, &state).await?;
    Ok(HttpResponse::Ok().json(json!({})))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/states")
            .route(web::get().to(list_states))
            .route(web::post().to(create_state)),
    )
    .service(
        web::resource("/states/{state_id}")
            .route(web::get().to(get_state))
            .route(web::put().to(update_state))
            .route(web::delete().to(delete_state)),
    );
}

#[cfg(test)]
mod tests {
    use crate::app;
    use crate::test_support::{self, call_json};
    use actix_web::http::StatusCode;
    use actix_web::test::{self, TestRequest};
    use serde_json::json;

    #[actix_rt::test]
    async fn test_state_lifecycle() {
        let (_dir, storage) = test_support::storage();
        let app = test::init_service(app::build(storage)).await;

        let (status, created) = call_json!(
            app,
            TestRequest::post()
                .uri("/api/v1/states/")
                .set_json(json!({ "name": "Nevada" }))
        );
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["name"], "Nevada");
        assert_eq!(created["__class__"], "State");

        let uri = format!("/api/v1/states/{}", created["id"].as_str().unwrap());
        let (status, updated) = call_json!(
            app,
            TestRequest::put()
                .uri(&uri)
                .set_json(json!({ "name": "Silver State", "updated_at": "x" }))
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "Silver State");
        assert_eq!(updated["updated_at"], created["updated_at"]);

        let (status, _) = call_json!(app, TestRequest::delete().uri(&uri));
        assert_eq!(status, StatusCode::OK);

        let (status, _) = call_json!(app, TestRequest::get().uri(&uri));
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn test_create_state_requires_name() {
        let (_dir, storage) = test_support::storage();
        let app = test::init_service(app::build(storage)).await;

        let (status, body) = call_json!(
            app,
            TestRequest::post()
                .uri("/api/v1/states")
                .set_json(json!({ "nom": "Nevada" }))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing name" }));
    }

    #[actix_rt::test]
    async fn test_update_state_rejects_non_object_body() {
        let (_dir, storage) = test_support::storage();
        let app = test::init_service(app::build(storage)).await;

        let (_, created) = call_json!(
            app,
            TestRequest::post()
                .uri("/api/v1/states")
                .set_json(json!({ "name": "Ohio" }))
        );
        let uri = format!("/api/v1/states/{}", created["id"].as_str().unwrap());

        let (status, body) = call_json!(
            app,
            TestRequest::put().uri(&uri).set_json(json!(["name", "Iowa"]))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Not a JSON" }));
    }
}
