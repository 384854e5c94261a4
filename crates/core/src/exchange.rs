//! The request/response unit of a chat turn.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::topic::Topic;

/// One user message and the answer produced for it.
///
/// Created per request and never stored by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatExchange {
    /// The raw user message
    pub message: String,

    /// How the message was classified
    pub topic: Topic,

    /// The answer text
    pub response: String,

    /// When the answer was produced
    pub timestamp: DateTime<Utc>,
}

impl ChatExchange {
    /// Stamp a new exchange with the current time.
    pub fn new(message: impl Into<String>, topic: Topic, response: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            topic,
            response: response.into(),
            timestamp: Utc::now(),
        }
    }

    /// The timestamp rendered as RFC 3339 text.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339()
    }
}
