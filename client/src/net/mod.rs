//! Networking modules for the chat WebSocket.
//!
//! SYSTEM CONTEXT
//! ==============
//! `socket` manages the WebSocket lifecycle under `hydrate`; `dispatch`
//! holds the pure state transitions applied for each server event so the
//! handshake and rendering behavior unit-test natively.

pub mod dispatch;
pub mod socket;
