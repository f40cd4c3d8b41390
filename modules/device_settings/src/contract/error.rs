//! Contract error types for the device settings module
//!
//! These errors are transport-agnostic; the REST layer maps them to
//! problem details.

use thiserror::Error;

/// Device settings errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Request body is not valid JSON
    #[error("Malformed JSON body: {details}")]
    MalformedBody {
        /// Parser message
        details: String,
    },

    /// Body is JSON but not an object or array
    #[error("Unsupported JSON body: {details}")]
    UnsupportedBody {
        /// Why the value was refused
        details: String,
    },

    /// Body declares a charset other than UTF-8
    #[error("Unsupported charset: {charset}")]
    UnsupportedCharset {
        /// Declared charset, lowercased
        charset: String,
    },

    /// Opt-in schema check rejected the document
    #[error("Schema validation failed: {}", errors.join(", "))]
    SchemaValidation {
        /// Validation errors
        errors: Vec<String>,
    },

    /// Stored document does not fit the typed record
    #[error("Stored settings do not match the device record: {details}")]
    Malformed {
        /// Deserializer message
        details: String,
    },

    /// Internal error
    #[error("Internal error")]
    Internal,
}
