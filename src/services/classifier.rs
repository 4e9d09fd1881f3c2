use serde_json::Value;

use crate::config::SpeakerMode;
use crate::models::notification::{Notification, NotificationData};
use crate::services::event_table::{self, FIXED_SOUND};
use crate::services::payload;

const MESSAGE_OVERRIDES: [&str; 2] = ["message", "custom_message"];
const SOUND_OVERRIDES: [&str; 2] = ["sound", "custom_sound"];

/// Turns webhook bodies into notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    mode: SpeakerMode,
}

impl Classifier {
    pub fn new(mode: SpeakerMode) -> Self {
        Self { mode }
    }

    /// Builds the notification for one webhook.
    ///
    /// In table mode the event key is resolved from the body (or the `event`
    /// query parameter), looked up in the event table, and caller-supplied
    /// `message`/`sound` fields win over the table. Fixed mode ignores the
    /// payload entirely.
    pub fn classify(&self, body: &Value, query_event: Option<&str>) -> Notification {
        match self.mode {
            SpeakerMode::Fixed => Notification::new(
                None,
                FIXED_SOUND.sound.to_string(),
                FIXED_SOUND.message.to_string(),
                None,
            ),
            SpeakerMode::Table => self.classify_with_table(body, query_event),
        }
    }

    fn classify_with_table(&self, body: &Value, query_event: Option<&str>) -> Notification {
        let event_type = payload::resolve_event_type(body, query_event);
        let mapping = event_table::sound_for(&event_type);

        let message = payload::first_string(body, &MESSAGE_OVERRIDES)
            .unwrap_or_else(|| mapping.message.to_string());
        let sound = payload::first_string(body, &SOUND_OVERRIDES)
            .unwrap_or_else(|| mapping.sound.to_string());

        let data = NotificationData {
            amount: payload::extract_amount(body),
            customer_name: payload::extract_customer_name(body),
            raw_event: event_type.clone(),
        };

        Notification::new(Some(event_type), sound, message, Some(data))
    }
}
