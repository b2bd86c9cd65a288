//! Chat panel shared by the support and tutor surfaces.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders a [`ChatSession`] transcript and submits user input to the backend
//! endpoint selected by [`ChatKind`]. The owning page holds the session
//! signal and its liveness flag, so an in-flight reply survives tab switches
//! and widget collapses that merely remount this panel; it is discarded only
//! once the session's owner unwinds.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::net::api::ApiClient;
use crate::state::chat::{ChatSession, TurnRole};
#[cfg(feature = "csr")]
use crate::state::chat::{resolve_chat_outcome, resolve_tutor_outcome};
use crate::util::markdown::render_markdown_html;

/// Which backend conversation a panel drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatKind {
    /// General support chat (`POST /api/chat`).
    Support,
    /// AI tutor (`POST /api/tutor/chat`).
    Tutor,
}

/// Transcript plus input row for one conversation.
#[component]
pub fn ChatPanel(
    session: RwSignal<ChatSession>,
    kind: ChatKind,
    /// Liveness flag owned by whoever owns `session`; cleared in that scope's
    /// `on_cleanup`, never by this panel unmounting.
    alive: Arc<AtomicBool>,
    #[prop(default = "Type your message...")] placeholder: &'static str,
    /// Input signal, exposed so owners can prefill it (quick suggestions).
    #[prop(default = RwSignal::new(String::new()))]
    input: RwSignal<String>,
) -> impl IntoView {
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    let client = expect_context::<ApiClient>();

    // Pin the view to the newest turn whenever the transcript grows.
    Effect::new(move || {
        let state = session.get();
        let _ = state.turns.len();
        let _ = state.pending;

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = Callback::new(move |()| {
        let text = input.get();
        if text.trim().is_empty() || session.get().pending {
            return;
        }

        let message = text.trim().to_owned();
        session.update(|s| {
            s.submit(&text);
        });

        #[cfg(feature = "csr")]
        {
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let outcome = match kind {
                    ChatKind::Support => client.send_chat_message(&message).await,
                    ChatKind::Tutor => client.send_tutor_message(&message).await,
                };
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                session.update(|s| match kind {
                    ChatKind::Support => resolve_chat_outcome(s, outcome),
                    ChatKind::Tutor => resolve_tutor_outcome(s, outcome),
                });
                input.set(String::new());
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (message, kind, &alive);
        }
    });

    let on_click = move |_| do_send.run(());

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send.run(());
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !session.get().pending;

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    session
                        .get()
                        .turns
                        .iter()
                        .map(|turn| {
                            let is_assistant = turn.role == TurnRole::Assistant;
                            let is_system = turn.role == TurnRole::System;
                            let text = turn.text.clone();

                            view! {
                                <div
                                    class="chat-panel__message"
                                    class:chat-panel__message--assistant=is_assistant
                                    class:chat-panel__message--system=is_system
                                >
                                    {if is_assistant {
                                        let rendered = render_markdown_html(&text);
                                        view! {
                                            <div class="chat-panel__markdown" inner_html=rendered></div>
                                        }
                                            .into_any()
                                    } else {
                                        view! { <span>{text}</span> }.into_any()
                                    }}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}

                {move || {
                    session
                        .get()
                        .pending
                        .then(|| view! { <div class="chat-panel__loading">"Thinking..."</div> })
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder=placeholder
                    disabled=move || session.get().pending
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
