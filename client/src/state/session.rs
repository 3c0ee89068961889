#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Connection lifecycle of the chat socket.
///
/// There is no reconnect: once `Disconnected` after a live connection, the
/// session is over until the page reloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    /// No socket, either not yet opened or closed for good.
    #[default]
    Disconnected,
    /// Socket opening.
    Connecting,
    /// Socket live.
    Connected,
}

/// Identity and connection state for the current browser session.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// Username confirmed by the server. Immutable once set.
    pub user: Option<String>,
    /// Username sent in an automatic join, awaiting the server's verdict.
    pub pending: Option<String>,
    /// Current contents of the username input field.
    pub field: String,
    /// Socket lifecycle.
    pub status: ConnectionStatus,
}

impl SessionState {
    /// The username field locks as soon as a join is in flight or confirmed.
    #[must_use]
    pub fn field_locked(&self) -> bool {
        self.user.is_some() || self.pending.is_some()
    }

    /// Username to stamp on outgoing messages.
    #[must_use]
    pub fn sender_name(&self) -> &str {
        self.user.as_deref().unwrap_or(self.field.trim())
    }

    /// Record an automatic join for a previously stored username. The field
    /// mirrors the name and locks immediately, before the server answers.
    pub fn begin_auto_join(&mut self, user: String) {
        self.field = user.clone();
        self.pending = Some(user);
    }

    /// The server accepted the join.
    pub fn confirm(&mut self, user: String) {
        self.field = user.clone();
        self.user = Some(user);
        self.pending = None;
    }

    /// The server rejected the join: identity and field reset entirely.
    pub fn reject(&mut self) {
        self.user = None;
        self.pending = None;
        self.field.clear();
    }

    /// Whether a message from `message_user` renders as the session's own.
    /// Decided purely by string equality with the confirmed username.
    #[must_use]
    pub fn is_mine(&self, message_user: &str) -> bool {
        self.user.as_deref() == Some(message_user)
    }
}
