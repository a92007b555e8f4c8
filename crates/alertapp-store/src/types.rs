//! Core types for alert storage.
//!
//! - [`AlertId`]: Server-assigned identity of a stored alert
//! - [`NewAlert`]: The caller-supplied part of an alert, as received
//! - [`Alert`]: A stored alert with identity and timestamp

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a stored alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(Uuid);

impl AlertId {
    /// Create a new random `AlertId`.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AlertId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An alert as submitted by a client.
///
/// Only `info` is taken from the caller and it defaults to empty text when
/// absent. Identity fields that clients send
/// along (`id`, `timestamp`, or the older `UUID`/`Time` keys) are ignored
/// during deserialization and replaced when the alert is stored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewAlert {
    /// Free-text description of the alert.
    #[serde(default, alias = "Info", alias = "INFO")]
    pub info: String,
}

impl NewAlert {
    /// Creates a new submission with the given text.
    #[must_use]
    pub fn new(info: impl Into<String>) -> Self {
        Self { info: info.into() }
    }

    /// Assigns a fresh identity and the current time.
    #[must_use]
    pub fn into_alert(self) -> Alert {
        Alert::new(self.info)
    }
}

/// A stored alert.
///
/// `id` and `timestamp` are always present and never change once the alert
/// has been stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Server-assigned identity.
    pub id: AlertId,
    /// When the alert was accepted.
    pub timestamp: DateTime<Utc>,
    /// Free-text description supplied by the caller.
    pub info: String,
}

impl Alert {
    /// Creates an alert with a fresh identity stamped with the current time.
    #[must_use]
    pub fn new(info: impl Into<String>) -> Self {
        Self::with_timestamp(info, Utc::now())
    }

    /// Creates an alert with a fresh identity and the given timestamp.
    #[must_use]
    pub fn with_timestamp(info: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: AlertId::new(),
            timestamp,
            info: info.into(),
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UUID: {} --- {} --- {}",
            self.id,
            self.timestamp.to_rfc3339(),
            self.info
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn alert_id_is_unique() {
        let a = AlertId::new();
        let b = AlertId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn alert_id_display_matches_uuid() {
        let uuid = Uuid::new_v4();
        let id = AlertId::from(uuid);
        assert_eq!(id.to_string(), uuid.to_string());
        assert_eq!(id.as_uuid(), uuid);
    }

    #[test]
    fn alert_new_assigns_identity() {
        let before = Utc::now();
        let alert = Alert::new("Spooky");
        let after = Utc::now();

        assert!(!alert.id.to_string().is_empty());
        assert!(alert.timestamp >= before && alert.timestamp <= after);
        assert_eq!(alert.info, "Spooky");
    }

    #[test]
    fn new_alert_into_alert_keeps_info() {
        let alert = NewAlert::new("Detected noise").into_alert();
        assert_eq!(alert.info, "Detected noise");
    }

    #[test]
    fn alert_serializes_with_string_id() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let alert = Alert::with_timestamp("Help!!", ts);

        let json = serde_json::to_value(&alert).unwrap();

        assert_eq!(json["id"], alert.id.to_string());
        assert_eq!(json["timestamp"], "2024-03-01T12:00:00Z");
        assert_eq!(json["info"], "Help!!");
    }

    #[test]
    fn new_alert_ignores_client_identity() {
        let json = r#"{"id":"client-id","timestamp":"yesterday","info":"May be a ghost"}"#;
        let new_alert: NewAlert = serde_json::from_str(json).unwrap();
        assert_eq!(new_alert, NewAlert::new("May be a ghost"));
    }

    #[test]
    fn new_alert_accepts_legacy_keys() {
        let json = r#"{"UUID":"abc","Time":null,"Info":"Proximity sensor activated"}"#;
        let new_alert: NewAlert = serde_json::from_str(json).unwrap();
        assert_eq!(new_alert.info, "Proximity sensor activated");
    }

    #[test]
    fn new_alert_info_defaults_to_empty() {
        let alert: NewAlert = serde_json::from_str(r#"{"id":"abc"}"#).unwrap();
        assert_eq!(alert, NewAlert::new(""));

        let alert: NewAlert = serde_json::from_str("{}").unwrap();
        assert_eq!(alert.info, "");
    }

    #[test]
    fn new_alert_accepts_legacy_key_casing() {
        let alert: NewAlert = serde_json::from_str(r#"{"INFO":"Spooky"}"#).unwrap();
        assert_eq!(alert.info, "Spooky");
    }

    #[test]
    fn new_alert_rejects_bad_shapes() {
        assert!(serde_json::from_str::<NewAlert>(r#"{"info":42}"#).is_err());
        assert!(serde_json::from_str::<NewAlert>(r#"{"info":null}"#).is_err());
        assert!(serde_json::from_str::<NewAlert>(r#""just a string""#).is_err());
    }

    #[test]
    fn alert_display_format() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let alert = Alert::with_timestamp("Spooky", ts);
        assert_eq!(
            alert.to_string(),
            format!("UUID: {} --- 2024-03-01T12:00:00+00:00 --- Spooky", alert.id)
        );
    }
}
