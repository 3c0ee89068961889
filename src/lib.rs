//! Parley chat server: shared state, room service, router, and the
//! WebSocket connection lifecycle.

pub mod routes;
pub mod services;
pub mod state;
pub mod ws;
