//! WebSocket connection lifecycle.
//!
//! Each connection gets a uuid, an outbound event channel registered with the
//! room, and a select loop pumping both directions. When either side closes,
//! the connection parts from the room and its username frees up.

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use tokio::sync::mpsc;
use uuid::Uuid;

use wire::{ClientEvent, ServerEvent};

use crate::services::room;
use crate::state::AppState;

/// Outbound buffer per connection; bursts beyond this drop frames for the
/// slow client instead of stalling the room.
const OUTBOUND_BUFFER: usize = 64;

/// Upgrade handler for `GET /ws`.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: AppState) {
    let client_id = Uuid::new_v4();
    let (tx, mut rx) = mpsc::channel::<ServerEvent>(OUTBOUND_BUFFER);
    state.room.write().await.clients.insert(client_id, tx);
    tracing::info!(%client_id, "client connected");

    loop {
        tokio::select! {
            outbound = rx.recv() => {
                let Some(event) = outbound else { break };
                let json = match wire::encode_server(&event) {
                    Ok(json) => json,
                    Err(error) => {
                        tracing::error!(%client_id, %error, "failed to encode outbound event");
                        continue;
                    }
                };
                if socket.send(Message::Text(json.into())).await.is_err() {
                    break;
                }
            }
            inbound = socket.recv() => {
                let Some(Ok(message)) = inbound else { break };
                let Message::Text(text) = message else { continue };
                handle_frame(&state, client_id, &text).await;
            }
        }
    }

    room::part(&state, client_id).await;
    tracing::info!(%client_id, "client disconnected");
}

async fn handle_frame(state: &AppState, client_id: Uuid, text: &str) {
    match wire::decode_client(text) {
        Ok(ClientEvent::Join { user }) => room::join(state, client_id, &user).await,
        Ok(ClientEvent::Message(message)) => room::post(state, client_id, message).await,
        Err(error) => {
            tracing::warn!(%client_id, %error, "dropping malformed frame");
        }
    }
}
