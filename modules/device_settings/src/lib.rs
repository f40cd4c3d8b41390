//! Device Settings Module
//!
//! In-memory configuration for an LED pixel controller, served over REST.
//! The whole settings document is replaced on every update; nothing is
//! validated unless schema validation is switched on, and nothing survives a
//! restart.

// Public exports
pub mod contract;
pub use contract::{
    client::DeviceSettingsApi, error::SettingsError, DeviceSettings,
};

pub mod module;
pub use module::DeviceSettingsModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
