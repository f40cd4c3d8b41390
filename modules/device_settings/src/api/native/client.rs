//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{DeviceSettings, DeviceSettingsApi, SettingsError};
use crate::domain::Service;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl DeviceSettingsApi for NativeClient {
    async fn get_settings(&self) -> Result<Value, SettingsError> {
        self.service.current_settings().await
    }

    async fn get_device_settings(&self) -> Result<DeviceSettings, SettingsError> {
        self.service.typed_settings().await
    }

    async fn update_settings(&self, data: Value) -> Result<(), SettingsError> {
        self.service.replace_settings(data).await
    }
}
