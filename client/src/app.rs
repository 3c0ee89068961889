//! Root application component and the socket sender context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::chat::ChatPage;
use crate::state::chat::ChatState;
use crate::state::session::SessionState;
use wire::ClientEvent;

/// Handle for queueing client events onto the socket's outgoing channel.
///
/// Default-constructed it is inert; the socket task installs a live sender
/// during app setup. Sends are serialized through the one channel.
#[derive(Clone, Default)]
pub struct SocketSender {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl SocketSender {
    /// Wrap a live outgoing channel.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn new(tx: futures::channel::mpsc::UnboundedSender<String>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Serialize and queue an event. Returns `false` without an active
    /// connection or when the event cannot be encoded.
    pub fn send(&self, event: &ClientEvent) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let Some(tx) = &self.tx else {
                return false;
            };
            match wire::encode_client(event) {
                Ok(json) => tx.unbounded_send(json).is_ok(),
                Err(_) => false,
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = event;
            false
        }
    }
}

/// Root application component.
///
/// Provides the shared state contexts and starts the socket lifecycle.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let chat = RwSignal::new(ChatState::default());
    let sender = RwSignal::new(SocketSender::default());

    provide_context(session);
    provide_context(chat);
    provide_context(sender);

    #[cfg(feature = "hydrate")]
    {
        let tx = crate::net::socket::spawn_socket(session, chat);
        sender.set(SocketSender::new(tx));
    }

    view! {
        <Title text="Parley"/>
        <ChatPage/>
    }
}
