//! In-memory repository implementation
//!
//! The settings document lives only as long as the repository; nothing is
//! written to disk.

use crate::contract::DeviceSettings;
use crate::domain::repository::SettingsRepository;
use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;

// ===== Settings Repository =====

pub struct InMemorySettingsRepository {
    cell: RwLock<Value>,
}

impl InMemorySettingsRepository {
    pub fn new(initial: Value) -> Self {
        Self {
            cell: RwLock::new(initial),
        }
    }

    /// Repository seeded with the factory defaults
    pub fn with_defaults() -> Self {
        Self::new(DeviceSettings::default().to_value())
    }
}

impl Default for InMemorySettingsRepository {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn load(&self) -> Result<Value> {
        Ok(self.cell.read().clone())
    }

    async fn replace(&self, data: Value) -> Result<Value> {
        Ok(std::mem::replace(&mut *self.cell.write(), data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_starts_with_defaults() {
        let repo = InMemorySettingsRepository::with_defaults();
        assert_eq!(repo.load().await.unwrap(), DeviceSettings::default().to_value());
    }

    #[tokio::test]
    async fn test_replace_returns_previous() {
        let repo = InMemorySettingsRepository::new(json!({"ssid": "a"}));

        let previous = repo.replace(json!({"ssid": "b"})).await.unwrap();
        assert_eq!(previous, json!({"ssid": "a"}));
        assert_eq!(repo.load().await.unwrap(), json!({"ssid": "b"}));
    }

    #[tokio::test]
    async fn test_replace_does_not_merge() {
        let repo = InMemorySettingsRepository::with_defaults();

        repo.replace(json!({"nodeName": "porch"})).await.unwrap();
        assert_eq!(repo.load().await.unwrap(), json!({"nodeName": "porch"}));
    }
}
