// src/test_support.rs
// Helpers shared by handler tests

use crate::db::{FileStorage, SharedStorage};
use std::sync::Arc;
use tempfile::TempDir;

/// Empty file engine in a temp dir; keep the dir alive for the test
pub fn storage() -> (TempDir, SharedStorage) {
    let dir = tempfile::tempdir().expect("temp dir");
    let storage: SharedStorage = Arc::new(FileStorage::new(dir.path().join("file.json")));
    (dir, storage)
}

/// Send a request built with `TestRequest` and return (status, JSON body)
macro_rules! call_json {
    ($app:expr, $req:expr) => {{
        let resp = actix_web::test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        (status, body)
    }};
}

/// POST a JSON body and return the `id` of the created entity
macro_rules! created_id {
    ($app:expr, $uri:expr, $body:expr) => {{
        let (status, body) = $crate::test_support::call_json!(
            $app,
            actix_web::test::TestRequest::post().uri($uri).set_json($body)
        );
        assert_eq!(status, actix_web::http::StatusCode::CREATED, "{}", body);
        body["id"].as_str().expect("id").to_string()
    }};
}

pub(crate) use call_json;
pub(crate) use created_id;
