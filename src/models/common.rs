use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

/// Query string of a speaker poll.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PollQuery {
    #[validate(required, length(min = 1, message = "Speaker key required"))]
    pub key: Option<String>,
}

/// Query string of an inbound webhook.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookQuery {
    pub event: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_query_requires_non_empty_key() {
        assert!(PollQuery { key: None }.validate().is_err());
        assert!(PollQuery { key: Some(String::new()) }.validate().is_err());
        assert!(PollQuery { key: Some("kitchen".to_string()) }.validate().is_ok());
    }
}
