//! Dismissible preview of the active reply draft.

use leptos::prelude::*;

use crate::state::chat::ChatState;

/// Banner above the composer while a reply draft is armed. Leptos text nodes
/// escape on their own, so the snapshot renders as plain text here.
#[component]
pub fn ReplyBanner() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let draft_user = move || {
        chat.get()
            .reply_draft
            .map(|r| r.user)
            .unwrap_or_default()
    };
    let draft_text = move || {
        chat.get()
            .reply_draft
            .map(|r| r.text)
            .unwrap_or_default()
    };

    view! {
        <Show when=move || chat.get().reply_draft.is_some()>
            <div class="reply-banner">
                <em class="reply-banner__label">
                    "Replying to " <strong>{draft_user}</strong> ": " {draft_text}
                </em>
                <button
                    class="reply-banner__cancel"
                    on:click=move |_| chat.update(|c| c.clear_reply_draft())
                >
                    "✕"
                </button>
            </div>
        </Show>
    }
}
