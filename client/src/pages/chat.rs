//! The single chat room screen.

use leptos::prelude::*;

use crate::components::composer::Composer;
use crate::components::message_list::MessageList;
use crate::components::reply_banner::ReplyBanner;
use crate::components::username_field::UsernameField;
use crate::state::session::{ConnectionStatus, SessionState};

/// Chat page: header with identity, the message log, and the composer row.
#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let status_notice = move || match session.get().status {
        ConnectionStatus::Connected => None,
        ConnectionStatus::Connecting => Some("Connecting...".to_owned()),
        ConnectionStatus::Disconnected => Some("Disconnected. Reload to rejoin.".to_owned()),
    };

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <h1 class="chat-page__title">"Parley"</h1>
                <UsernameField/>
            </header>

            <Show when=move || status_notice().is_some()>
                <div class="chat-page__status">{move || status_notice().unwrap_or_default()}</div>
            </Show>

            <MessageList/>

            <div class="chat-page__composer">
                <ReplyBanner/>
                <Composer/>
            </div>
        </div>
    }
}
