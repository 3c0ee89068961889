//! Room service: the join handshake and message fan-out.
//!
//! DESIGN
//! ======
//! All replies and broadcasts go through per-client channels with `try_send`.
//! A client whose buffer is full loses the frame rather than stalling the
//! room; the delivery channel capacity absorbs normal bursts.

#[cfg(test)]
#[path = "room_test.rs"]
mod room_test;

use uuid::Uuid;

use wire::{ChatMessage, ServerEvent};

use crate::state::{AppState, RoomState};

/// Why a join was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinRejection {
    /// Empty or whitespace-only name.
    EmptyName,
    /// Name held by another live connection.
    NameTaken,
}

impl JoinRejection {
    /// Message surfaced to the rejected client.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyName => "a username is required",
            Self::NameTaken => "name taken",
        }
    }
}

/// Validate a join request against the current room.
///
/// # Errors
///
/// Rejects blank names and names already held by a live connection. A
/// connection re-joining under its own confirmed name is accepted.
pub fn validate_join(room: &RoomState, client_id: Uuid, user: &str) -> Result<String, JoinRejection> {
    let user = user.trim();
    if user.is_empty() {
        return Err(JoinRejection::EmptyName);
    }
    if room.name_of(client_id) != Some(user) && room.name_taken(user) {
        return Err(JoinRejection::NameTaken);
    }
    Ok(user.to_owned())
}

/// Handle a join request: register the name and reply `joined` plus the full
/// history as `init`, or reply `error`.
pub async fn join(state: &AppState, client_id: Uuid, user: &str) {
    let mut room = state.room.write().await;

    match validate_join(&room, client_id, user) {
        Ok(user) => {
            room.names.insert(client_id, user.clone());
            tracing::info!(%client_id, %user, "joined");
            send_to(&room, client_id, ServerEvent::Joined { user });
            send_to(&room, client_id, ServerEvent::Init { messages: room.history.clone() });
        }
        Err(rejection) => {
            tracing::info!(%client_id, ?rejection, "join rejected");
            send_to(&room, client_id, ServerEvent::Error { message: rejection.message().to_owned() });
        }
    }
}

/// Handle an incoming message: append to history and fan out as `new` to
/// every connected client, the sender included.
pub async fn post(state: &AppState, client_id: Uuid, mut message: ChatMessage) {
    let mut room = state.room.write().await;

    // Only joined connections may post; the stored sender name wins over
    // whatever the payload claims.
    let Some(user) = room.name_of(client_id) else {
        tracing::warn!(%client_id, "dropping message from unjoined connection");
        return;
    };
    if !message.has_content() {
        tracing::warn!(%client_id, "dropping empty message");
        return;
    }
    message.user = user.to_owned();

    room.history.push(message.clone());
    broadcast(&room, &ServerEvent::New { message });
}

/// Forget a departed connection, freeing its username.
pub async fn part(state: &AppState, client_id: Uuid) {
    let mut room = state.room.write().await;
    room.clients.remove(&client_id);
    if let Some(user) = room.names.remove(&client_id) {
        tracing::info!(%client_id, %user, "left");
    } else {
        tracing::info!(%client_id, "disconnected before joining");
    }
}

/// Deliver an event to every connected client.
pub fn broadcast(room: &RoomState, event: &ServerEvent) {
    for (client_id, sender) in &room.clients {
        if sender.try_send(event.clone()).is_err() {
            tracing::warn!(%client_id, "dropping frame for slow client");
        }
    }
}

fn send_to(room: &RoomState, client_id: Uuid, event: ServerEvent) {
    let Some(sender) = room.clients.get(&client_id) else {
        return;
    };
    if sender.try_send(event).is_err() {
        tracing::warn!(%client_id, "dropping frame for slow client");
    }
}
