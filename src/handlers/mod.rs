pub mod health;
pub mod webhook;

use actix_web::http::Method;
use actix_web::web;

/// `/webhook` plus the path the service answered on when it ran as a Netlify function.
pub const WEBHOOK_PATHS: [&str; 2] = ["/webhook", "/.netlify/functions/webhook"];

/// Largest webhook body accepted, matching the 6 MB Netlify allowed.
pub const MAX_WEBHOOK_BODY: usize = 6 * 1024 * 1024;

pub fn configure(cfg: &mut web::ServiceConfig) {
    for path in WEBHOOK_PATHS {
        cfg.service(
            web::resource(path)
                .app_data(web::PayloadConfig::new(MAX_WEBHOOK_BODY))
                .route(web::get().to(webhook::poll_notifications))
                .route(web::post().to(webhook::receive_webhook))
                .route(web::method(Method::OPTIONS).to(webhook::preflight))
                .default_service(web::to(webhook::method_not_allowed))
                .wrap(webhook::cors_headers()),
        );
    }

    cfg.route("/health", web::get().to(health::health_check));
}
