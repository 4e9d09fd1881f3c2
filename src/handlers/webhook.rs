use actix_web::middleware::DefaultHeaders;
use actix_web::web::{Bytes, Data, Query};
use actix_web::{HttpRequest, HttpResponse};
use validator::Validate;

use crate::error::WebhookError;
use crate::models::common::{ErrorResponse, PollQuery, WebhookQuery};
use crate::models::notification::{PollResponse, QueuedResponse};
use crate::services::classifier::Classifier;
use crate::services::payload;
use crate::services::store::NotificationStore;

/// Headers sent on every webhook response, preflight included.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add((
            "Access-Control-Allow-Headers",
            "Content-Type, Authorization, X-Webhook-Secret",
        ))
        .add(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
        .add(("Content-Type", "application/json"))
}

// OPTIONS
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

// GET ?key=<speaker key>
pub async fn poll_notifications(
    req: HttpRequest,
    store: Data<dyn NotificationStore>,
) -> Result<HttpResponse, WebhookError> {
    let query = Query::<PollQuery>::from_query(req.query_string())
        .map(Query::into_inner)
        .unwrap_or_default();

    if query.validate().is_err() {
        return Ok(HttpResponse::Unauthorized().json(ErrorResponse::new("Speaker key required")));
    }

    let notifications = store.drain()?;
    log::debug!(
        "[Webhook Speaker] Speaker {} drained {} notification(s)",
        query.key.as_deref().unwrap_or_default(),
        notifications.len()
    );

    Ok(HttpResponse::Ok().json(PollResponse {
        success: true,
        count: notifications.len(),
        notifications,
    }))
}

// POST, any body
pub async fn receive_webhook(
    req: HttpRequest,
    body: Bytes,
    classifier: Data<Classifier>,
    store: Data<dyn NotificationStore>,
) -> Result<HttpResponse, WebhookError> {
    let query = Query::<WebhookQuery>::from_query(req.query_string())
        .map(Query::into_inner)
        .unwrap_or_default();

    let payload = payload::parse_body(&body);
    let notification = classifier.classify(&payload, query.event.as_deref());
    let notification_id = notification.id.clone();
    let summary = format!(
        "{} -> {} ({})",
        notification.event_type.as_deref().unwrap_or("fixed"),
        notification.sound,
        notification.message
    );

    store.enqueue(notification)?;
    log::info!("[Webhook Speaker] Queued notification {}: {}", notification_id, summary);

    Ok(HttpResponse::Ok().json(QueuedResponse {
        success: true,
        message: "Notification queued".to_string(),
        notification_id,
    }))
}

pub async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    log::warn!("[Webhook Speaker] Rejected {} {}", req.method(), req.path());
    HttpResponse::MethodNotAllowed().json(ErrorResponse::new("Method not allowed"))
}
