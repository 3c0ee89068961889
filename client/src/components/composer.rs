//! Outgoing message composition: text, optional image, send triggers.

use leptos::prelude::*;

use crate::app::SocketSender;
use crate::state::chat::ChatState;
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::util::compose;
#[cfg(feature = "hydrate")]
use wire::ClientEvent;

/// Composer row. Sends on button click or Enter without Shift; a send needs
/// a username plus text or an image. While an image read is in flight the
/// composer is busy and further sends are rejected, so a rapid second send
/// cannot race ahead of the pending image payload.
#[component]
pub fn Composer() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let sender = expect_context::<RwSignal<SocketSender>>();

    let input = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let do_send = move || {
        if busy.get_untracked() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let user = session.get_untracked().sender_name().to_owned();
            let text = input.get_untracked();
            let file = file_ref
                .get()
                .and_then(|el| el.files())
                .and_then(|list| list.get(0));
            if user.is_empty() || (text.trim().is_empty() && file.is_none()) {
                return;
            }

            let time = now_iso();
            let mut reply = None;
            chat.update(|c| reply = c.take_reply_draft());

            if let Some(file) = file {
                busy.set(true);
                leptos::task::spawn_local(async move {
                    if let Some(image) = read_data_uri(&file).await {
                        if let Some(message) = compose::build_message(&user, &text, Some(image), reply, time) {
                            sender.get_untracked().send(&ClientEvent::Message(message));
                        }
                    } else {
                        leptos::logging::warn!("image read failed; message dropped");
                    }
                    busy.set(false);
                });
            } else if let Some(message) = compose::build_message(&user, &text, None, reply, time) {
                sender.get_untracked().send(&ClientEvent::Message(message));
            }

            input.set(String::new());
            if let Some(el) = file_ref.get() {
                el.set_value("");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, chat, sender, input, file_ref);
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="composer">
            <input
                class="composer__input"
                type="text"
                placeholder="Type a message"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <input class="composer__file" type="file" accept="image/*" node_ref=file_ref/>
            <button class="composer__send" on:click=on_click disabled=move || busy.get()>
                "Send"
            </button>
        </div>
    }
}

/// Current instant as an ISO-8601 string, matching the wire `time` field.
#[cfg(feature = "hydrate")]
fn now_iso() -> String {
    js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_default()
}

/// Read a selected file and inline it as a base64 `data:` URI.
#[cfg(feature = "hydrate")]
async fn read_data_uri(file: &web_sys::File) -> Option<String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await.ok()?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Some(compose::data_uri(&file.type_(), &bytes))
}
