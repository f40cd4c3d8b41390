//! Common test utilities for driving the REST surface in-process

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use device_settings::{Config, DeviceSettingsModule};
use serde_json::Value;

/// Module plus router over a fresh settings cell
pub fn setup_app(config: Config) -> (DeviceSettingsModule, Router) {
    let module = DeviceSettingsModule::init(config);
    let router = module
        .register_rest(Router::new())
        .expect("routes should register");
    (module, router)
}

/// Router with default configuration
pub fn default_app() -> Router {
    setup_app(Config::default()).1
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    post_raw(uri, Some("application/json"), serde_json::to_vec(body).unwrap())
}

pub fn post_raw(uri: &str, content_type: Option<&str>, body: impl Into<Body>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder.body(body.into()).unwrap()
}

/// Extract JSON body from response
pub async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}
