//! Message types
//!
//! Defines chat message structures and senders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::routing::RecommendedContact;

/// Who sent a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    /// Message typed (or picked from a suggestion) by the visitor
    User,
    /// Canned reply from the assistant
    Bot,
}

/// Identifier of a message, increasing in creation order within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    /// Display text
    pub content: String,
    pub sender: Sender,
    /// Creation time, only used for display
    pub created_at: DateTime<Utc>,
    /// Quick replies offered after a bot message
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    /// Advisory team matches attached by the routing rule
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_contacts: Vec<RecommendedContact>,
}

impl Message {
    /// Create a user message
    pub fn user(id: MessageId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            sender: Sender::User,
            created_at: Utc::now(),
            suggestions: Vec::new(),
            recommended_contacts: Vec::new(),
        }
    }

    /// Create a bot message with its quick replies
    pub fn bot(id: MessageId, content: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            id,
            content: content.into(),
            sender: Sender::Bot,
            created_at: Utc::now(),
            suggestions,
            recommended_contacts: Vec::new(),
        }
    }

    pub fn with_contacts(mut self, contacts: Vec<RecommendedContact>) -> Self {
        self.recommended_contacts = contacts;
        self
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }
}
