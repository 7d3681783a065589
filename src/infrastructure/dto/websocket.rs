//! WebSocket event DTOs for the realtime channel.

use serde::{Deserialize, Serialize};

use crate::{common::time::format_timestamp, domain::ChatMessage};

/// Event type discriminator carried in every outbound frame
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    Members,
    PreviousMessages,
    Message,
}

/// Inbound chat frame sent by a client. Extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub data: String,
}

/// Member-name list, delivered privately on connect and broadcast to the
/// room on every membership change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembersEvent {
    pub r#type: EventType,
    pub members: Vec<String>,
}

/// Full message history, delivered privately to a newly connected member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviousMessagesEvent {
    pub r#type: EventType,
    pub messages: Vec<ChatMessageDto>,
}

/// Chat message broadcast to the whole room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatEvent {
    pub r#type: EventType,
    pub name: String,
    pub message: String,
    /// Receipt time formatted as `%Y-%m-%d %H:%M:%S` (UTC)
    pub timestamp: String,
}

/// Wire form of one message-log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessageDto {
    pub name: String,
    pub message: String,
    pub timestamp: String,
}

impl From<&ChatMessage> for ChatMessageDto {
    fn from(message: &ChatMessage) -> Self {
        Self {
            name: message.sender.as_str().to_string(),
            message: message.body.as_str().to_string(),
            timestamp: format_timestamp(message.timestamp.value()),
        }
    }
}

impl From<&ChatMessage> for ChatEvent {
    fn from(message: &ChatMessage) -> Self {
        Self {
            r#type: EventType::Message,
            name: message.sender.as_str().to_string(),
            message: message.body.as_str().to_string(),
            timestamp: format_timestamp(message.timestamp.value()),
        }
    }
}
