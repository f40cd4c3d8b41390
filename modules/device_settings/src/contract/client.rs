//! Native client trait for in-process callers
//!
//! Components living in the same process (for example a pixel driver that
//! needs the current geometry) talk to the module through this trait instead
//! of going over HTTP.

use super::{error::SettingsError, model::DeviceSettings};
use async_trait::async_trait;
use serde_json::Value;

/// Device settings API for in-process communication
#[async_trait]
pub trait DeviceSettingsApi: Send + Sync {
    /// Current settings document, verbatim
    async fn get_settings(&self) -> Result<Value, SettingsError>;

    /// Current settings as the typed record
    async fn get_device_settings(&self) -> Result<DeviceSettings, SettingsError>;

    /// Replace the whole settings document
    async fn update_settings(&self, data: Value) -> Result<(), SettingsError>;
}
