//! Configuration for the device settings module

use crate::contract::DeviceSettings;
use serde::{Deserialize, Serialize};

/// Device settings module configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Check posted documents against the device record schema
    #[serde(default)]
    pub enable_schema_validation: bool,

    /// Maximum request body size in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Settings the cell starts with; factory defaults when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_settings: Option<DeviceSettings>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_schema_validation: false,
            max_body_bytes: default_max_body_bytes(),
            initial_settings: None,
        }
    }
}

impl Config {
    /// Settings the cell is seeded with
    pub fn seed_settings(&self) -> DeviceSettings {
        self.initial_settings.clone().unwrap_or_default()
    }
}

fn default_max_body_bytes() -> usize {
    100 * 1024 // 100KB
}
