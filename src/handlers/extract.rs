// src/handlers/extract.rs
// DOCUMENTATION: Request plumbing shared by every route group
// PURPOSE: Open a storage session per request and turn raw bodies into typed DTOs

use crate::db::{Session, SharedStorage};
use crate::errors::ApiError;
use actix_web::{
    dev::Payload, error::ErrorInternalServerError, web, FromRequest, HttpMessage, HttpRequest,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::future::{ready, Ready};

/// A decoded JSON object body
pub type JsonObject = Map<String, Value>;

/// Each handler receives a fresh session; it is closed (unsaved changes
/// dropped) when the handler returns
impl FromRequest for Session {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let storage = req
            .app_data::<web::Data<SharedStorage>>()
            .map(|data| data.get_ref().clone());

        ready(match storage {
            Some(storage) => Ok(Session::open(storage)),
            None => {
                log::error!("No storage registered in application data");
                Err(ErrorInternalServerError("storage not configured"))
            }
        })
    }
}

/// Parse the request body as a JSON object
/// DOCUMENTATION: The body counts as JSON only when Content-Type is
/// `application/json` (or a `+json` type) and it parses to an object;
/// anything else is `ApiError::NotAJson`
pub fn json_object(req: &HttpRequest, body: &[u8]) -> Result<JsonObject, ApiError> {
    let content_type = req.content_type().to_ascii_lowercase();
    if content_type != "application/json" && !content_type.ends_with("+json") {
        log::debug!("Rejected body with content type {:?}", content_type);
        return Err(ApiError::NotAJson);
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(ApiError::NotAJson),
    }
}

/// Check required keys in order, failing on the first one absent
pub fn require_fields(body: &JsonObject, fields: &[&'static str]) -> Result<(), ApiError> {
    match fields.iter().find(|field| !body.contains_key(**field)) {
        Some(missing) => Err(ApiError::MissingField(*missing)),
        None => Ok(()),
    }
}

/// Decode the object into a request DTO; unknown keys are ignored
pub fn decode<T: DeserializeOwned>(body: JsonObject) -> Result<T, ApiError> {
    serde_json::from_value(Value::Object(body)).map_err(|e| ApiError::InvalidInput(e.to_string()))
}
