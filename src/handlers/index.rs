// src/handlers/index.rs
// DOCUMENTATION: Status and aggregate-count handlers
// PURPOSE: Liveness check and per-kind entity counts

use crate::db::Session;
use crate::errors::ApiError;
use crate::services::StatsService;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use serde_json::json;

/// GET /status
pub async fn status() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "OK" }))
}

/// GET /stats
/// Number of stored entities per kind; a storage failure is a 500 with its message
pub async fn stats(session: Session) -> Result<impl Responder, ApiError> {
    let counts = StatsService::counts(&session).await?;
    Ok(HttpResponse::Ok().json(counts))
}

/// Fallback for unmatched paths
pub async fn not_found() -> HttpResponse {
    ApiError::NotFound.error_response()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/status", web::get().to(status))
        .route("/stats", web::get().to(stats));
}

#[cfg(test)]
mod tests {
    use crate::app;
    use crate::db::{Change, SharedStorage, Storage, StorageError};
    use crate::models::{Kind, Record};
    use crate::test_support::{self, call_json};
    use actix_web::http::StatusCode;
    use actix_web::test::{self, TestRequest};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Arc;

    #[actix_rt::test]
    async fn test_status() {
        let (_dir, storage) = test_support::storage();
        let app = test::init_service(app::build(storage)).await;

        let (status, body) = call_json!(app, TestRequest::get().uri("/api/v1/status"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "OK" }));

        let (status, _) = call_json!(app, TestRequest::get().uri("/api/v1/status/"));
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_rt::test]
    async fn test_stats_counts_every_kind() {
        let (_dir, storage) = test_support::storage();
        let app = test::init_service(app::build(storage)).await;

        let (_, state) = call_json!(
            app,
            TestRequest::post()
                .uri("/api/v1/states")
                .set_json(json!({ "name": "Texas" }))
        );
        call_json!(
            app,
            TestRequest::post()
                .uri(&format!("/api/v1/states/{}/cities", state["id"].as_str().unwrap()))
                .set_json(json!({ "name": "Austin" }))
        );

        let (status, body) = call_json!(app, TestRequest::get().uri("/api/v1/stats"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "amenities": 0,
                "cities": 1,
                "places": 0,
                "reviews": 0,
                "states": 1,
                "users": 0
            })
        );
    }

    struct BrokenStorage;

    #[async_trait]
    impl Storage for BrokenStorage {
        async fn all(&self, _: Option<Kind>) -> Result<Vec<Record>, StorageError> {
            Ok(Vec::new())
        }

        async fn get(&self, _: Kind, _: &str) -> Result<Option<Record>, StorageError> {
            Ok(None)
        }

        async fn count(&self, _: Option<Kind>) -> Result<usize, StorageError> {
            Err(StorageError::Config("engine offline".to_string()))
        }

        async fn commit(&self, _: Vec<Change>) -> Result<(), StorageError> {
            Ok(())
        }

        async fn reload(&self) -> Result<(), StorageError> {
            Ok(())
        }

        async fn close(&self) -> Result<(), StorageError> {
            Ok(())
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }

    #[actix_rt::test]
    async fn test_stats_storage_failure_is_500() {
        let storage: SharedStorage = Arc::new(BrokenStorage);
        let app = test::init_service(app::build(storage)).await;

        let (status, body) = call_json!(app, TestRequest::get().uri("/api/v1/stats"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Configuration error: engine offline" }));
    }

    #[actix_rt::test]
    async fn test_unknown_path_is_json_404() {
        let (_dir, storage) = test_support::storage();
        let app = test::init_service(app::build(storage)).await;

        let (status, body) = call_json!(app, TestRequest::get().uri("/api/v1/nowhere"));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Not found" }));
    }
}
