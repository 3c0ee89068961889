//! Pure state transitions for incoming server events.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use wire::ServerEvent;

use crate::state::chat::ChatState;
use crate::state::session::SessionState;

/// Browser side effect requested by an applied server event. The socket
/// layer executes these against localStorage and the window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SideEffect {
    /// Persist the confirmed username across reloads.
    PersistUser(String),
    /// Drop the persisted username and surface the rejection message.
    ResetIdentity {
        /// Text for the blocking alert dialog.
        alert: String,
    },
}

/// Apply one server event to session and chat state.
///
/// `joined` confirms and persists the identity; `error` resets it; `init`
/// replaces the log in server order; `new` appends.
pub fn apply_server_event(
    event: &ServerEvent,
    session: &mut SessionState,
    chat: &mut ChatState,
) -> Option<SideEffect> {
    match event {
        ServerEvent::Joined { user } => {
            session.confirm(user.clone());
            Some(SideEffect::PersistUser(user.clone()))
        }
        ServerEvent::Error { message } => {
            session.reject();
            Some(SideEffect::ResetIdentity { alert: message.clone() })
        }
        ServerEvent::Init { messages } => {
            chat.set_history(messages.clone());
            None
        }
        ServerEvent::New { message } => {
            chat.append(message.clone());
            None
        }
    }
}
