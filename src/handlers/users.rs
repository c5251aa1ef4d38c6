// src/handlers/users.rs
// DOCUMENTATION: HTTP handlers for user operations
// PURPOSE: Parse requests, call UserService, return dictionary forms

use crate::db::Session;
use crate::errors::ApiError;
use crate::models::Entity;
use crate::services::UserService;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde_json::json;

use super::extract::{decode, json_object, require_fields};
use super::to_dicts;

/// GET /users
pub async fn list_users(session: Session) -> Result<impl Responder, ApiError> {
    let users = UserService::list(&session).await?;
    Ok(HttpResponse::Ok().json(to_dicts(&users)))
}

/// GET /users/{user_id}
pub async fn get_user(
    session: Session,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let user = UserService::get(&session, &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user.to_dict()))
}

/// POST /users
/// Requires `email` then `password`
pub async fn create_user(
    mut session: Session,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<impl Responder, ApiError> {
    let body = json_object(&req, &body)?;
    require_fields(&body, &["email", "password"])?;

    let user = UserService::create(&mut session, decode(body)?).await?;
    Ok(HttpResponse::Created().json(user.to_dict()))
}

/// PUT /users/{user_id}
/// `id`, `email` and timestamps in the body are ignored
pub async fn update_user(
    mut session: Session,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<impl Responder, ApiError> {
    let user = UserService::get(&session, &path.into_inner()).await?;
    let body = json_object(&req, &body)?;

    let user = UserService::update(&mut session, user, decode(body)?).await?;
    Ok(HttpResponse::Ok().json(user.to_dict()))
}

/// DELETE /users/{user_id}
pub async fn delete_user(
    mut session: Session,
    path: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    let user = UserService::get(&session, &path.into_inner()).await?;
    UserService::delete(&mut session, &user).await?;
    Ok(HttpResponse::Ok().json(json!({})))
}

/// Configuration for user routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users")
            .route(web::get().to(list_users))
            .route(web::post().to(create_user)),
    )
    .service(
        web::resource("/users/{user_id}")
            .route(web::get().to(get_user))
            .route(web::put().to(update_user))
            .route(web::delete().to(delete_user)),
    );
}

#[cfg(test)]
mod tests {
    use crate::app;
    use crate::test_support::{self, call_json};
    use actix_web::http::{header::ContentType, StatusCode};
    use actix_web::test::{self, TestRequest};
    use serde_json::json;

    #[actix_rt::test]
    async fn test_create_get_list_user() {
        let (_dir, storage) = test_support::storage();
        let app = test::init_service(app::build(storage)).await;

        let payload = json!({
            "email": "betty@example.com",
            "password": "pwd",
            "first_name": "Betty"
        });
        let (status, created) = call_json!(
            app,
            TestRequest::post().uri("/api/v1/users").set_json(&payload)
        );
        assert_eq!(status, StatusCode::CREATED);
        assert!(!created["id"].as_str().unwrap().is_empty());
        assert_eq!(created["__class__"], "User");
        for (key, value) in payload.as_object().unwrap() {
            assert_eq!(&created[key], value);
        }

        let uri = format!("/api/v1/users/{}", created["id"].as_str().unwrap());
        let (status, fetched) = call_json!(app, TestRequest::get().uri(&uri));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, listed) = call_json!(app, TestRequest::get().uri("/api/v1/users"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed, json!([created]));
    }

    #[actix_rt::test]
    async fn test_create_user_validation() {
        let (_dir, storage) = test_support::storage();
        let app = test::init_service(app::build(storage)).await;

        let (status, body) = call_json!(
            app,
            TestRequest::post()
                .uri("/api/v1/users")
                .set_json(json!({ "password": "x" }))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing email" }));

        let (status, body) = call_json!(
            app,
            TestRequest::post()
                .uri("/api/v1/users")
                .set_json(json!({ "email": "a@b.c" }))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing password" }));

        let (status, body) = call_json!(
            app,
            TestRequest::post()
                .uri("/api/v1/users")
                .insert_header(ContentType::plaintext())
                .set_payload("email=a@b.c")
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Not a JSON" }));

        let (_, listed) = call_json!(app, TestRequest::get().uri("/api/v1/users"));
        assert_eq!(listed, json!([]));
    }

    #[actix_rt::test]
    async fn test_update_user_keeps_email_and_identity() {
        let (_dir, storage) = test_support::storage();
        let app = test::init_service(app::build(storage)).await;

        let (_, created) = call_json!(
            app,
            TestRequest::post()
                .uri("/api/v1/users")
                .set_json(json!({ "email": "a@b.c", "password": "old" }))
        );
        let uri = format!("/api/v1/users/{}", created["id"].as_str().unwrap());

        let (status, updated) = call_json!(
            app,
            TestRequest::put().uri(&uri).set_json(json!({
                "id": "other",
                "email": "new@b.c",
                "created_at": "2000-01-01T00:00:00.000000",
                "password": "new",
                "last_name": "Holberton"
            }))
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"], created["id"]);
        assert_eq!(updated["email"], "a@b.c");
        assert_eq!(updated["created_at"], created["created_at"]);
        assert_eq!(updated["updated_at"], created["updated_at"]);
        assert_eq!(updated["password"], "new");
        assert_eq!(updated["last_name"], "Holberton");

        let (_, fetched) = call_json!(app, TestRequest::get().uri(&uri));
        assert_eq!(fetched, updated);
    }

    #[actix_rt::test]
    async fn test_update_missing_user_is_404_before_body_check() {
        let (_dir, storage) = test_support::storage();
        let app = test::init_service(app::build(storage)).await;

        let (status, body) = call_json!(
            app,
            TestRequest::put()
                .uri("/api/v1/users/nope")
                .set_payload("not json")
        );
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Not found" }));
    }

    #[actix_rt::test]
    async fn test_delete_user_twice() {
        let (_dir, storage) = test_support::storage();
        let app = test::init_service(app::build(storage)).await;

        let (_, created) = call_json!(
            app,
            TestRequest::post()
                .uri("/api/v1/users")
                .set_json(json!({ "email": "a@b.c", "password": "x" }))
        );
        let uri = format!("/api/v1/users/{}", created["id"].as_str().unwrap());

        let (status, body) = call_json!(app, TestRequest::delete().uri(&uri));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));

        let (status, body) = call_json!(app, TestRequest::delete().uri(&uri));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Not found" }));
    }
}
