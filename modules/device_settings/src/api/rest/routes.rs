//! Route registration

use crate::domain::Service;
use super::{dto::*, error::Problem, extract::LenientJson, handlers, openapi::ApiDoc};
use axum::{
    extract::{DefaultBodyLimit, Request},
    http::{header, Method, StatusCode, Uri},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

/// Register all REST routes
pub fn register_routes(
    router: Router,
    service: Arc<Service>,
    max_body_bytes: usize,
) -> anyhow::Result<Router> {
    let router = router
        .route("/settings", get(get_settings_handler))
        .route("/update", post(update_settings_handler))
        .route("/openapi.json", get(openapi_handler))
        // Add service as extension for handlers
        .layer(Extension(service))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(cors_layer())
        .layer(middleware::from_fn(preflight_no_content))
        .layer(TraceLayer::new_for_http());

    Ok(router)
}

/// Any origin may read and replace the settings
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
}

/// Answer successful CORS preflights with 204 No Content
async fn preflight_no_content(req: Request, next: Next) -> Response {
    let is_preflight = req.method() == Method::OPTIONS
        && req.headers().contains_key(header::ACCESS_CONTROL_REQUEST_METHOD);

    let mut response = next.run(req).await;
    if is_preflight && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }
    response
}

// ===== Handler wrappers that extract service from Extension =====

async fn get_settings_handler(
    Extension(service): Extension<Arc<Service>>,
    uri: Uri,
) -> Result<Json<serde_json::Value>, Problem> {
    handlers::get_settings(service)
        .await
        .map_err(|e| e.with_instance(uri.path()))
}

async fn update_settings_handler(
    Extension(service): Extension<Arc<Service>>,
    uri: Uri,
    body: LenientJson,
) -> Result<Json<UpdateResponse>, Problem> {
    handlers::update_settings(service, body)
        .await
        .map_err(|e| e.with_instance(uri.path()))
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
