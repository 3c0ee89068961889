//! Shared wire model for the chat protocol.
//!
//! This crate owns the JSON message shapes exchanged between the `parley`
//! server and its clients (browser and terminal). Events travel as JSON text
//! frames over a WebSocket; the envelope is a lowercase `type` tag with the
//! event fields inline.

use serde::{Deserialize, Serialize};

/// Error returned by the encode/decode helpers.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The event could not be serialized to JSON.
    #[error("failed to encode wire event: {0}")]
    Encode(serde_json::Error),
    /// The text is not valid JSON or does not match any known event shape.
    #[error("failed to decode wire event: {0}")]
    Decode(serde_json::Error),
}

/// A chat message as it travels on the wire and sits in room history.
///
/// Immutable once created; the server stores and forwards it verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sender's username.
    pub user: String,
    /// Message body. Absent for image-only messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// RFC 3339 timestamp stamped by the sender at composition time.
    /// Receivers fall back to their own clock when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Inline image as a `data:` URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Denormalized sender + body copy of the replied-to message. There is no
    /// message id on this protocol, so a reply carries content, not a
    /// reference.
    #[serde(default, rename = "replyTo", skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<ReplyRef>,
}

impl ChatMessage {
    /// Whether the message carries anything worth delivering.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.text.as_deref().is_some_and(|t| !t.trim().is_empty()) || self.image.is_some()
    }
}

/// Sender + body snapshot of a message targeted by a reply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyRef {
    /// Sender of the original message.
    pub user: String,
    /// Body of the original message.
    pub text: String,
}

/// Events sent by a client to the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientEvent {
    /// Request a username. Must precede any `message` on the connection.
    Join {
        /// Requested username.
        user: String,
    },
    /// Post a message to the room.
    Message(ChatMessage),
}

/// Events pushed by the server to a client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerEvent {
    /// The join was accepted; `user` is locked in for the session.
    Joined {
        /// Confirmed username.
        user: String,
    },
    /// The join was rejected.
    Error {
        /// Human-readable rejection reason.
        message: String,
    },
    /// Full room history, oldest first. Sent once after a successful join.
    Init {
        /// History in arrival order.
        messages: Vec<ChatMessage>,
    },
    /// A single new message, fanned out to every connected client.
    New {
        /// The message to append.
        message: ChatMessage,
    },
}

/// Encode a client event as a JSON text frame.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] when serialization fails.
pub fn encode_client(event: &ClientEvent) -> Result<String, CodecError> {
    serde_json::to_string(event).map_err(CodecError::Encode)
}

/// Encode a server event as a JSON text frame.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] when serialization fails.
pub fn encode_server(event: &ServerEvent) -> Result<String, CodecError> {
    serde_json::to_string(event).map_err(CodecError::Encode)
}

/// Decode a JSON text frame into a client event.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed or unrecognized frames.
pub fn decode_client(text: &str) -> Result<ClientEvent, CodecError> {
    serde_json::from_str(text).map_err(CodecError::Decode)
}

/// Decode a JSON text frame into a server event.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed or unrecognized frames.
pub fn decode_server(text: &str) -> Result<ServerEvent, CodecError> {
    serde_json::from_str(text).map_err(CodecError::Decode)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
