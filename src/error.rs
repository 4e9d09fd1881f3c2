use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::common::ErrorResponse;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("notification queue lock poisoned")]
    Poisoned,
}

#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("Notification store failed: {0}")]
    Store(#[from] StoreError),
}

impl ResponseError for WebhookError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    // Detail stays in the server log.
    fn error_response(&self) -> HttpResponse {
        log::error!("[Webhook Speaker] Error: {}", self);
        HttpResponse::InternalServerError().json(ErrorResponse::new("Internal server error"))
    }
}
