//! Outgoing payload construction.
//!
//! The read-then-send flow is a single explicit composition step: gather
//! field values, optionally inline the image, then build the payload here.

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;

use wire::{ChatMessage, ReplyRef};

/// Build the outgoing message payload, if there is anything to send.
///
/// Requires a non-empty username and at least one of non-empty text or an
/// image. The reply draft, when present, rides along as `replyTo`.
#[must_use]
pub fn build_message(
    user: &str,
    text: &str,
    image: Option<String>,
    reply_to: Option<ReplyRef>,
    time: String,
) -> Option<ChatMessage> {
    let user = user.trim();
    let text = text.trim();
    if user.is_empty() || (text.is_empty() && image.is_none()) {
        return None;
    }

    Some(ChatMessage {
        user: user.to_owned(),
        text: (!text.is_empty()).then(|| text.to_owned()),
        time: Some(time),
        image,
        reply_to,
    })
}

/// Inline raw bytes as a base64 `data:` URI.
#[must_use]
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    use base64::Engine as _;

    let mime = if mime.is_empty() { "application/octet-stream" } else { mime };
    format!("data:{mime};base64,{}", base64::engine::general_purpose::STANDARD.encode(bytes))
}
