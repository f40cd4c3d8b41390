//! Domain service - read and replace the device settings document

use crate::contract::{DeviceSettings, SettingsError};
use super::events::{EventPublisher, SettingsEvent};
use super::repository::SettingsRepository;
use serde_json::Value;
use std::sync::Arc;

/// Domain service for device settings
pub struct Service {
    settings_repo: Arc<dyn SettingsRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    /// Check posted documents against the device record schema
    schema_validation: bool,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        settings_repo: Arc<dyn SettingsRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        schema_validation: bool,
    ) -> Self {
        Self {
            settings_repo,
            event_publisher,
            schema_validation,
        }
    }

    /// Whether posted documents are schema-checked
    pub fn schema_validation_enabled(&self) -> bool {
        self.schema_validation
    }

    /// Current settings document, verbatim
    pub async fn current_settings(&self) -> Result<Value, SettingsError> {
        self.settings_repo.load().await.map_err(|e| {
            tracing::error!("Failed to load device settings: {:?}", e);
            SettingsError::Internal
        })
    }

    /// Current settings as the typed record
    ///
    /// Fails with `Malformed` when a client stored something that does not
    /// fit the record; the stored document is left untouched.
    pub async fn typed_settings(&self) -> Result<DeviceSettings, SettingsError> {
        let data = self.current_settings().await?;
        serde_json::from_value(data).map_err(|e| SettingsError::Malformed {
            details: e.to_string(),
        })
    }

    /// Replace the whole settings document
    pub async fn replace_settings(&self, data: Value) -> Result<(), SettingsError> {
        if self.schema_validation {
            crate::domain::validation::validate_device_settings(&data)?;
        }

        let previous = self
            .settings_repo
            .replace(data.clone())
            .await
            .map_err(|e| {
                tracing::error!("Failed to store device settings: {:?}", e);
                SettingsError::Internal
            })?;

        // The body carries the Wi-Fi password, so only its shape is logged.
        tracing::info!(
            fields = field_count(&data),
            "Device settings replaced"
        );

        if let Err(e) = self
            .event_publisher
            .publish(SettingsEvent::replaced(data, previous))
            .await
        {
            // Log error but don't fail the operation
            tracing::warn!("Failed to publish settings event: {}", e);
        }

        Ok(())
    }

    /// Restore the factory defaults
    pub async fn reset_to_defaults(&self) -> Result<(), SettingsError> {
        self.replace_settings(DeviceSettings::default().to_value())
            .await
    }
}

fn field_count(data: &Value) -> usize {
    match data {
        Value::Object(map) => map.len(),
        Value::Array(items) => items.len(),
        _ => 0,
    }
}
