//! UI components for the chat page.
//!
//! ARCHITECTURE
//! ============
//! Components read shared state from context and keep rendering concerns
//! local; protocol and persistence logic live in `net` and `util`.

pub mod composer;
pub mod message_list;
pub mod reply_banner;
pub mod username_field;
