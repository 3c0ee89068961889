//! WebSocket client for the chat room.
//!
//! Manages one connection to the page's own origin: open, auto-join with the
//! stored username, pump outgoing frames from a channel, dispatch incoming
//! events into state. There is no reconnect: a closed socket is terminal for
//! the session until the page reloads.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.

#[cfg(feature = "hydrate")]
use crate::net::dispatch::{SideEffect, apply_server_event};
#[cfg(feature = "hydrate")]
use crate::state::chat::ChatState;
#[cfg(feature = "hydrate")]
use crate::state::session::{ConnectionStatus, SessionState};
#[cfg(feature = "hydrate")]
use crate::util::storage;
#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Update};

/// Spawn the socket lifecycle as a local async task and return the sender
/// for outgoing JSON frames. All sends funnel through this single channel,
/// so frames reach the transport in queue order.
#[cfg(feature = "hydrate")]
pub fn spawn_socket(
    session: RwSignal<SessionState>,
    chat: RwSignal<ChatState>,
) -> futures::channel::mpsc::UnboundedSender<String> {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();
    session.update(|s| s.status = ConnectionStatus::Connecting);
    leptos::task::spawn_local(socket_loop(session, chat, tx.clone(), rx));

    tx
}

#[cfg(feature = "hydrate")]
async fn socket_loop(
    session: RwSignal<SessionState>,
    chat: RwSignal<ChatState>,
    tx: futures::channel::mpsc::UnboundedSender<String>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    let location = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let ws_proto = if location.starts_with("https") { "wss" } else { "ws" };
    let host = web_sys::window()
        .and_then(|w| w.location().host().ok())
        .unwrap_or_else(|| "localhost:3000".to_owned());
    let ws_url = format!("{ws_proto}://{host}/ws");

    match connect_and_run(&ws_url, session, chat, &tx, rx).await {
        Ok(()) => leptos::logging::log!("socket closed"),
        Err(e) => leptos::logging::warn!("socket error: {e}"),
    }

    // Terminal: the session ends with the connection.
    session.update(|s| s.status = ConnectionStatus::Disconnected);
}

/// Connect, auto-join if an identity is stored, and process frames until
/// either direction shuts down.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    session: RwSignal<SessionState>,
    chat: RwSignal<ChatState>,
    tx: &futures::channel::mpsc::UnboundedSender<String>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<String>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    session.update(|s| s.status = ConnectionStatus::Connected);

    if let Some(user) = storage::load_user() {
        session.update(|s| s.begin_auto_join(user.clone()));
        if let Ok(json) = wire::encode_client(&wire::ClientEvent::Join { user }) {
            let _ = tx.unbounded_send(json);
        }
    }

    let send_task = async {
        use futures::SinkExt;
        while let Some(msg) = rx.next().await {
            if ws_write.send(Message::Text(msg)).await.is_err() {
                break;
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => handle_text(&text, session, chat),
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("socket recv error: {e}");
                    break;
                }
            }
        }
    };

    // When either direction finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}

/// Decode one frame, apply it to state, and run the requested side effect.
#[cfg(feature = "hydrate")]
fn handle_text(text: &str, session: RwSignal<SessionState>, chat: RwSignal<ChatState>) {
    let event = match wire::decode_server(text) {
        Ok(event) => event,
        Err(error) => {
            leptos::logging::warn!("dropping malformed frame: {error}");
            return;
        }
    };

    let mut effect = None;
    session.update(|s| {
        chat.update(|c| {
            effect = apply_server_event(&event, s, c);
        });
    });

    match effect {
        Some(SideEffect::PersistUser(user)) => storage::save_user(&user),
        Some(SideEffect::ResetIdentity { alert }) => {
            storage::clear_user();
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&alert);
            }
        }
        None => {}
    }
}
