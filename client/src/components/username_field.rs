//! Username input driving the join handshake.

use leptos::prelude::*;

use crate::app::SocketSender;
use crate::state::session::SessionState;
use wire::ClientEvent;

/// Username field. Locked while a join is in flight or confirmed; an unlocked
/// field submits a join when it loses focus with non-empty content.
#[component]
pub fn UsernameField() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let sender = expect_context::<RwSignal<SocketSender>>();

    let on_blur = move |_| {
        let state = session.get_untracked();
        if state.field_locked() {
            return;
        }
        let user = state.field.trim().to_owned();
        if user.is_empty() {
            return;
        }
        sender.get_untracked().send(&ClientEvent::Join { user });
    };

    view! {
        <input
            class="username-field"
            type="text"
            placeholder="Pick a username"
            prop:value=move || session.get().field
            disabled=move || session.get().field_locked()
            on:input=move |ev| session.update(|s| s.field = event_target_value(&ev))
            on:blur=on_blur
        />
    }
}
