//! Storage layer - the settings cell

pub mod repositories;

pub use repositories::InMemorySettingsRepository;
