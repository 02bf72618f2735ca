//! Shared chat message model and notification codec.
//!
//! This crate owns the wire representation used by both `server` and `client`.
//! The notification channel is one-directional (server to client) and carries
//! UTF-8 text frames only: an empty frame is a keep-alive ping, any other frame
//! is a JSON object with exactly the two string fields `nickname` and `content`.

use serde::{Deserialize, Serialize};

/// WebSocket sub-protocol token offered by the client and selected by the server.
pub const PROTOCOL: &str = "meowww";

/// Path segment appended to a room path to reach its notification channel.
pub const NOTIFY_SEGMENT: &str = "notify";

/// Canonical form field carrying the sender name.
pub const FIELD_NICKNAME: &str = "nickname";

/// Canonical form field carrying the message text.
pub const FIELD_CONTENT: &str = "content";

/// Error returned by [`decode_notification`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text frame is not a JSON object with exactly `nickname` and `content`.
    #[error("malformed notification payload: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Binary frames are not part of the notification protocol.
    #[error("binary notification frames are not supported")]
    Binary,
}

/// A single chat message as it travels over the wire.
///
/// There is no id, timestamp, or sequence number; arrival order is the only
/// ordering signal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatMessage {
    pub nickname: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(nickname: impl Into<String>, content: impl Into<String>) -> Self {
        Self { nickname: nickname.into(), content: content.into() }
    }
}

/// A decoded notification frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    /// Empty keep-alive frame; never rendered.
    Ping,
    /// A new chat message.
    Message(ChatMessage),
}

/// Encode a notification into the text frame sent on the wire.
#[must_use]
pub fn encode_notification(notification: &Notification) -> String {
    match notification {
        Notification::Ping => String::new(),
        // Serializing two `String` fields cannot fail.
        Notification::Message(message) => serde_json::to_string(message).unwrap_or_default(),
    }
}

/// Decode a text frame received on the notification channel.
///
/// # Errors
///
/// Returns [`CodecError::Malformed`] for non-empty payloads that are not a
/// well-formed [`ChatMessage`].
pub fn decode_notification(text: &str) -> Result<Notification, CodecError> {
    if text.is_empty() {
        return Ok(Notification::Ping);
    }
    let message = serde_json::from_str::<ChatMessage>(text)?;
    Ok(Notification::Message(message))
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
