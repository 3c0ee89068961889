#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use wire::{ChatMessage, ReplyRef};

/// Message log and reply draft for the single chat room.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Rendered messages, oldest first. Messages are immutable once appended.
    pub messages: Vec<ChatMessage>,
    /// The message currently targeted for reply, if any. At most one;
    /// overwritten last-write-wins.
    pub reply_draft: Option<ReplyRef>,
}

impl ChatState {
    /// Replace the log with the server's history, preserving its order.
    pub fn set_history(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages;
    }

    /// Append a single incoming message.
    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Arm a reply draft, replacing any previous one.
    pub fn set_reply_draft(&mut self, target: ReplyRef) {
        self.reply_draft = Some(target);
    }

    /// Dismiss the reply draft.
    pub fn clear_reply_draft(&mut self) {
        self.reply_draft = None;
    }

    /// Detach the reply draft for an outgoing send, clearing it.
    pub fn take_reply_draft(&mut self) -> Option<ReplyRef> {
        self.reply_draft.take()
    }
}
