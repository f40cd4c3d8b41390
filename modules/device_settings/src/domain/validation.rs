//! Opt-in JSON Schema validation for posted settings
//!
//! Only used when `enable_schema_validation` is set. Numeric fields carry no
//! range constraints: only presence and JSON type are checked.

use crate::contract::SettingsError;
use jsonschema::Validator;
use serde_json::{json, Value};

/// JSON Schema of the device settings record
pub fn device_settings_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "ssid": { "type": "string" },
            "password": { "type": "string" },
            "nodeName": { "type": "string" },
            "pixelSize": { "type": "integer" },
            "pixelCount": { "type": "integer" },
            "startUniverse": { "type": "integer" },
            "sync": { "type": "boolean" }
        },
        "required": [
            "ssid",
            "password",
            "nodeName",
            "pixelSize",
            "pixelCount",
            "startUniverse",
            "sync"
        ]
    })
}

/// Validate a document against the device settings schema
pub fn validate_device_settings(data: &Value) -> Result<(), SettingsError> {
    validate_against_schema(data, &device_settings_schema())
}

/// Validate a document against a JSON Schema, collecting every violation
pub fn validate_against_schema(data: &Value, schema: &Value) -> Result<(), SettingsError> {
    let validator = Validator::new(schema).map_err(|e| {
        tracing::error!("Invalid JSON Schema: {}", e);
        SettingsError::Internal
    })?;

    let errors: Vec<String> = validator
        .iter_errors(data)
        .map(|error| error.to_string())
        .collect();

    if !errors.is_empty() {
        return Err(SettingsError::SchemaValidation { errors });
    }

    Ok(())
}
