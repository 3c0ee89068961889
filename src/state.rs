//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the single room: in-memory message history, connected clients, and
//! the usernames held by live connections. Nothing is persisted; history
//! lives for the process lifetime only.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

use wire::{ChatMessage, ServerEvent};

/// Live room state.
pub struct RoomState {
    /// Messages in arrival order.
    pub history: Vec<ChatMessage>,
    /// Connected clients: connection id -> sender for outgoing events.
    pub clients: HashMap<Uuid, mpsc::Sender<ServerEvent>>,
    /// Confirmed usernames keyed by connection id. A name frees up when its
    /// connection goes away.
    pub names: HashMap<Uuid, String>,
}

impl RoomState {
    #[must_use]
    pub fn new() -> Self {
        Self { history: Vec::new(), clients: HashMap::new(), names: HashMap::new() }
    }

    /// Whether `user` is already held by a live connection.
    #[must_use]
    pub fn name_taken(&self, user: &str) -> bool {
        self.names.values().any(|n| n == user)
    }

    /// The confirmed username for a connection, if it has joined.
    #[must_use]
    pub fn name_of(&self, client_id: Uuid) -> Option<&str> {
        self.names.get(&client_id).map(String::as_str)
    }
}

impl Default for RoomState {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the room is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub room: Arc<RwLock<RoomState>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self { room: Arc::new(RwLock::new(RoomState::new())) }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
