//! Contract models for the device settings module
//!
//! The stored settings are a raw JSON document; `DeviceSettings` is the typed
//! view of the record the controller expects. It is used for defaults and for
//! best-effort typed reads, never to reshape what clients post.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Flat configuration record for the LED pixel controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSettings {
    /// Wi-Fi network name
    #[schema(example = "test")]
    pub ssid: String,
    /// Wi-Fi network password
    #[schema(example = "password")]
    pub password: String,
    /// Device identifier
    #[schema(example = "node")]
    pub node_name: String,
    /// Bytes per pixel (3 = RGB, 4 = RGBW)
    #[schema(example = 4)]
    pub pixel_size: i64,
    /// Number of addressable pixels
    #[schema(example = 60)]
    pub pixel_count: i64,
    /// First DMX/Art-Net universe the controller listens on
    #[schema(example = 0)]
    pub start_universe: i64,
    /// Whether frames are presented on sync packets
    #[schema(example = true)]
    pub sync: bool,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            ssid: "test".to_string(),
            password: "password".to_string(),
            node_name: "node".to_string(),
            pixel_size: 4,
            pixel_count: 60,
            start_universe: 0,
            sync: true,
        }
    }
}

impl DeviceSettings {
    /// DMX channels consumed by the strip (`pixelSize * pixelCount`)
    pub fn total_channels(&self) -> i64 {
        self.pixel_size.saturating_mul(self.pixel_count)
    }

    /// JSON document form, as stored and served
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "ssid": self.ssid,
            "password": self.password,
            "nodeName": self.node_name,
            "pixelSize": self.pixel_size,
            "pixelCount": self.pixel_count,
            "startUniverse": self.start_universe,
            "sync": self.sync,
        })
    }
}

impl From<DeviceSettings> for Value {
    fn from(settings: DeviceSettings) -> Self {
        settings.to_value()
    }
}
