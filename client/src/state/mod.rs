//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session` for identity and connection,
//! `chat` for the message log and reply draft) so components can depend
//! on small focused models.

pub mod chat;
pub mod session;
