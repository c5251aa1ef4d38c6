// src/app.rs
// DOCUMENTATION: Application factory
// PURPOSE: Wire storage, middleware and route groups into one actix App

use crate::db::SharedStorage;
use crate::errors::ApiError;
use crate::handlers;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::StatusCode,
    middleware::{Compress, ErrorHandlerResponse, ErrorHandlers, Logger, NormalizePath},
    web, App, Error, ResponseError,
};

/// Build the application around a shared storage engine
/// DOCUMENTATION: Used by the HTTP server for every worker and by handler
/// tests, so both exercise the same middleware and routing
pub fn build(
    storage: SharedStorage,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(storage))
        .configure(handlers::config)
        .default_service(web::to(handlers::not_found))
        .wrap(
            ErrorHandlers::new()
                .handler(StatusCode::METHOD_NOT_ALLOWED, json_error)
                .handler(StatusCode::PAYLOAD_TOO_LARGE, json_error),
        )
        // Trailing slashes are accepted on every route
        .wrap(NormalizePath::trim())
        .wrap(Logger::default())
        .wrap(Compress::default())
}

/// Re-render framework-generated 405 and 413 responses as `{"error": ...}`
fn json_error<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let error = match res.status() {
        StatusCode::METHOD_NOT_ALLOWED => ApiError::MethodNotAllowed,
        _ => ApiError::PayloadTooLarge,
    };
    let (req, _) = res.into_parts();
    let res = ServiceResponse::new(req, error.error_response()).map_into_right_body();
    Ok(ErrorHandlerResponse::Response(res))
}
