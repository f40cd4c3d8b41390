//! HTTP request handlers - thin layer that delegates to domain service

use crate::domain::Service;
use super::{dto::*, error::{map_domain_error, Problem}, extract::LenientJson};
use axum::Json;
use serde_json::Value;
use std::sync::Arc;

/// Get the current device settings
#[utoipa::path(
    get,
    path = "/settings",
    tag = "device-settings",
    responses(
        (status = 200, description = "Stored settings document, verbatim", body = crate::contract::DeviceSettings),
        (status = 500, description = "Internal error", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn get_settings(service: Arc<Service>) -> Result<Json<Value>, Problem> {
    let settings = service.current_settings().await.map_err(map_domain_error)?;

    Ok(Json(settings))
}

/// Replace the device settings with the request body
#[utoipa::path(
    post,
    path = "/update",
    tag = "device-settings",
    request_body(content = crate::contract::DeviceSettings, description = "Full settings document; stored as sent"),
    responses(
        (status = 200, description = "Settings replaced", body = UpdateResponse),
        (status = 400, description = "Body is not a JSON object or array", body = Problem, content_type = "application/problem+json"),
        (status = 413, description = "Body exceeds the configured limit", body = Problem, content_type = "application/problem+json"),
        (status = 415, description = "Declared charset is not UTF-8", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn update_settings(
    service: Arc<Service>,
    LenientJson(data): LenientJson,
) -> Result<Json<UpdateResponse>, Problem> {
    service
        .replace_settings(data)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(UpdateResponse::ok()))
}
