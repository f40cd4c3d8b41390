//! Repository trait for the settings cell
//!
//! Implementations are in infra/storage.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Storage for the single settings document
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Current document
    async fn load(&self) -> Result<Value>;

    /// Replace the document, returning the previous one
    async fn replace(&self, data: Value) -> Result<Value>;
}
