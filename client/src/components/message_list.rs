//! Scrolling message log with drag-to-reply bubbles.

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::state::session::SessionState;
use crate::util::gesture::{DragTracker, ReplyDrag};
use crate::util::render;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
use wire::ReplyRef;

/// The message window. Bubbles render through `render::message_html` (all
/// user text escaped there) and act as drag sources for reply targeting.
#[component]
pub fn MessageList() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let drag = RwSignal::new(DragTracker::default());
    let window_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the view pinned to the newest message.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = window_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="chat-window" node_ref=window_ref>
            {move || {
                let state = chat.get();
                let me = session.get();
                if state.messages.is_empty() {
                    return view! {
                        <div class="chat-window__empty">"No messages yet"</div>
                    }
                        .into_any();
                }

                state
                    .messages
                    .iter()
                    .map(|msg| {
                        let class = if me.is_mine(&msg.user) { "message me" } else { "message them" };
                        let html = render::message_html(msg, &render::local_time_label(msg.time.as_deref()));
                        let target = ReplyRef {
                            user: msg.user.clone(),
                            text: msg.text.clone().unwrap_or_default(),
                        };
                        view! {
                            <div
                                class=class
                                inner_html=html
                                on:pointerdown=move |ev| {
                                    // Capture the pointer so the matching
                                    // pointerup lands on this bubble even when
                                    // the release happens elsewhere.
                                    #[cfg(feature = "hydrate")]
                                    if let Some(el) = ev
                                        .current_target()
                                        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                                    {
                                        let _ = el.set_pointer_capture(ev.pointer_id());
                                    }
                                    drag.update(|d| {
                                        d.begin(ReplyDrag {
                                            pointer_id: ev.pointer_id(),
                                            start_x: f64::from(ev.client_x()),
                                            target: target.clone(),
                                        });
                                    });
                                }
                                on:pointerup=move |ev| {
                                    let mut armed = None;
                                    drag.update(|d| {
                                        armed = d.finish(ev.pointer_id(), f64::from(ev.client_x()));
                                    });
                                    if let Some(reply) = armed {
                                        chat.update(|c| c.set_reply_draft(reply));
                                    }
                                }
                                on:pointercancel=move |_| drag.update(DragTracker::cancel)
                            ></div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}
