use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A queued sound/message waiting for a speaker to poll it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: String,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    pub sound: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<NotificationData>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationData {
    pub amount: Option<String>,
    pub customer_name: Option<String>,
    pub raw_event: String,
}

impl Notification {
    pub fn new(
        event_type: Option<String>,
        sound: String,
        message: String,
        data: Option<NotificationData>,
    ) -> Self {
        let timestamp = Utc::now();
        Self {
            id: generate_id(&timestamp),
            timestamp,
            event_type,
            sound,
            message,
            data,
        }
    }
}

// Millisecond time prefix keeps ids roughly sortable; the UUID makes them unique.
fn generate_id(timestamp: &DateTime<Utc>) -> String {
    format!("{:x}{}", timestamp.timestamp_millis(), Uuid::new_v4().simple())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueuedResponse {
    pub success: bool,
    pub message: String,
    pub notification_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollResponse {
    pub success: bool,
    pub count: usize,
    pub notifications: Vec<Notification>,
}

/// ISO-8601 with millisecond precision and a `Z` suffix, e.g. `2026-01-01T12:00:00.000Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
