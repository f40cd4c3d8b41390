//! Contract layer - public API for in-process communication
//!
//! Transport-agnostic models, errors and the native client trait.

pub mod client;
pub mod error;
pub mod model;

pub use client::DeviceSettingsApi;
pub use error::SettingsError;
pub use model::DeviceSettings;
