//! Domain events for the device settings module
//!
//! Events are delivered in-process only; nothing is recorded. A consumer
//! that subscribes late sees only replacements made after it subscribed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::broadcast;

/// Domain event types for device settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum SettingsEvent {
    /// The settings document was replaced
    SettingsReplaced(SettingsReplacedEvent),
}

/// Event data for a replacement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsReplacedEvent {
    /// New document
    pub data: Value,
    /// Document that was overwritten
    pub previous: Value,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

impl SettingsEvent {
    /// Create a new SettingsReplaced event
    pub fn replaced(data: Value, previous: Value) -> Self {
        SettingsEvent::SettingsReplaced(SettingsReplacedEvent {
            data,
            previous,
            timestamp: Utc::now(),
        })
    }
}

/// Event publisher trait for publishing domain events
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a settings event
    async fn publish(&self, event: SettingsEvent) -> anyhow::Result<()>;
}

/// No-op event publisher for testing or when events are disabled
pub struct NoOpEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: SettingsEvent) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Fans events out to in-process subscribers over a tokio broadcast channel
pub struct BroadcastEventPublisher {
    sender: broadcast::Sender<SettingsEvent>,
}

impl BroadcastEventPublisher {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribe to future events
    pub fn subscribe(&self) -> broadcast::Receiver<SettingsEvent> {
        self.sender.subscribe()
    }
}

#[async_trait::async_trait]
impl EventPublisher for BroadcastEventPublisher {
    async fn publish(&self, event: SettingsEvent) -> anyhow::Result<()> {
        // Having no subscribers is not an error.
        if self.sender.receiver_count() > 0 {
            self.sender
                .send(event)
                .map_err(|e| anyhow::anyhow!("failed to broadcast settings event: {}", e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_settings_replaced_event_creation() {
        let event = SettingsEvent::replaced(json!({"ssid": "b"}), json!({"ssid": "a"}));

        match event {
            SettingsEvent::SettingsReplaced(e) => {
                assert_eq!(e.data, json!({"ssid": "b"}));
                assert_eq!(e.previous, json!({"ssid": "a"}));
            }
        }
    }

    #[test]
    fn test_event_serialization_is_tagged() {
        let event = SettingsEvent::replaced(json!({}), json!({"sync": true}));

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event_type"], "settings_replaced");
        assert_eq!(value["data"], json!({}));
        assert_eq!(value["previous"], json!({"sync": true}));

        let back: SettingsEvent = serde_json::from_value(value).unwrap();
        assert_eq!(back, event);
    }

    #[tokio::test]
    async fn test_noop_publisher() {
        let publisher = NoOpEventPublisher;
        assert!(publisher
            .publish(SettingsEvent::replaced(json!({}), json!({})))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_broadcast_publisher_without_subscribers() {
        let publisher = BroadcastEventPublisher::new(4);
        assert!(publisher
            .publish(SettingsEvent::replaced(json!({}), json!({})))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_broadcast_publisher_delivers_to_subscriber() {
        let publisher = BroadcastEventPublisher::new(4);
        let mut rx = publisher.subscribe();

        publisher
            .publish(SettingsEvent::replaced(json!({"nodeName": "x"}), json!({})))
            .await
            .unwrap();

        let SettingsEvent::SettingsReplaced(event) = rx.recv().await.unwrap();
        assert_eq!(event.data, json!({"nodeName": "x"}));
    }
}
