//! Domain layer - business logic and services

pub mod events;
pub mod repository;
pub mod service;
pub mod validation;

pub use events::{BroadcastEventPublisher, EventPublisher, NoOpEventPublisher, SettingsEvent};
pub use repository::SettingsRepository;
pub use service::Service;
