//! Service Routes
//!
//! The welcome page and health check.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};

use crate::rest_api::HealthResponse;

pub const WELCOME_TEXT: &str = "Welcome to the E-commerce Product API";

/// Root and health routes
pub fn service_routes() -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
}

async fn root_handler() -> &'static str {
    WELCOME_TEXT
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::ok()))
}
