use actix_web::web::Data;
use actix_web::HttpResponse;
use serde::Serialize;

use crate::error::WebhookError;
use crate::services::store::NotificationStore;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub pending: usize,
}

pub async fn health_check(store: Data<dyn NotificationStore>) -> Result<HttpResponse, WebhookError> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        pending: store.len()?,
    }))
}
