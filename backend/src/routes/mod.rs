//! Route definitions for the Property Manager API
//!
//! This module organizes all API routes and applies middleware. The
//! fallback handler owns the 404 shape for unmatched paths.

use crate::config::AppConfig;
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use property_manager_shared::types::FailBody;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod health;
mod manager;
mod units;

#[cfg(test)]
mod manager_tests;

pub use manager::manager_routes;
pub use units::{apartment_unit_routes, unit_routes};

/// Request body cap, mirroring the original API's 10kb JSON limit
const BODY_LIMIT_BYTES: usize = 10 * 1024;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(state.config());

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api/v1", api_routes())
        .fallback(unknown_route)
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "Property Manager API v1" }))
        .nest("/building-manager", manager::manager_routes())
        .nest("/units", units::unit_routes())
        .nest("/apartment-units", units::apartment_unit_routes())
}

/// Session cookies require credentialed CORS, which rules out a wildcard
/// origin; the single allowed origin comes from configuration.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origin = config
        .cors
        .allow_origin
        .parse::<HeaderValue>()
        .unwrap_or_else(|_| HeaderValue::from_static("http://localhost:3000"));

    CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

/// 404 for unmatched routes
async fn unknown_route(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(FailBody::new(format!(
            "Cannot find {} on this server.",
            uri.path()
        ))),
    )
}
