//! Module declaration and wiring
//!
//! Builds the settings cell, the domain service and the router. The server
//! binary owns one `DeviceSettingsModule` for its whole lifetime.

use crate::config::Config;
use crate::domain::{BroadcastEventPublisher, Service, SettingsEvent};
use crate::infra::storage::InMemorySettingsRepository;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::broadcast;

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Device settings module
pub struct DeviceSettingsModule {
    config: Config,
    service: Arc<Service>,
    events: Arc<BroadcastEventPublisher>,
}

impl DeviceSettingsModule {
    /// Wire repository, event publisher and service from configuration
    pub fn init(config: Config) -> Self {
        let settings_repo = Arc::new(InMemorySettingsRepository::new(
            config.seed_settings().to_value(),
        ));
        let events = Arc::new(BroadcastEventPublisher::new(EVENT_CHANNEL_CAPACITY));

        let service = Arc::new(Service::new(
            settings_repo,
            events.clone(),
            config.enable_schema_validation,
        ));

        tracing::info!(
            schema_validation = config.enable_schema_validation,
            max_body_bytes = config.max_body_bytes,
            "Device settings module initialized"
        );

        Self {
            config,
            service,
            events,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// In-process client over the same settings cell
    pub fn client(&self) -> Arc<dyn crate::contract::DeviceSettingsApi> {
        Arc::new(crate::api::native::NativeClient::new(self.service.clone()))
    }

    /// Receive an event for every replacement made from now on
    pub fn subscribe(&self) -> broadcast::Receiver<SettingsEvent> {
        self.events.subscribe()
    }

    /// Register the REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        tracing::info!("Registering device settings REST routes");
        crate::api::rest::routes::register_routes(
            router,
            self.service.clone(),
            self.config.max_body_bytes,
        )
    }
}

impl Default for DeviceSettingsModule {
    fn default() -> Self {
        Self::init(Config::default())
    }
}
