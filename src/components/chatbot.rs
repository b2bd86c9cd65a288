//! Fully client-side chatbot with a fixed question/answer table.
//!
//! DESIGN
//! ======
//! No network involvement at all: answers come from an exact-match lookup so
//! the teaching-resources page stays useful when the backend is down. The
//! transcript is local to the component and resets with it.

#[cfg(test)]
#[path = "chatbot_test.rs"]
mod chatbot_test;

use leptos::prelude::*;

/// Reply shown for questions outside the canned table.
pub const FALLBACK_REPLY: &str = "I'm sorry, I don't have information on that.";

/// Canned answer for a question, exact match on the full text.
pub fn canned_reply(question: &str) -> &'static str {
    match question {
        "I need help with lesson planning" => {
            "You can check out resources on Edutopia for lesson planning ideas."
        }
        "I'm struggling with classroom management" => {
            "Consider reading articles on classroom management strategies on Teaching Strategies."
        }
        "How can I engage my students better?" => {
            "Khan Academy has great resources on interactive teaching methods."
        }
        "What tools can I use for assessments?" => {
            "Coursera offers courses on assessment tools and techniques."
        }
        _ => FALLBACK_REPLY,
    }
}

/// One rendered chatbot line.
#[derive(Clone, Debug, PartialEq, Eq)]
struct BotLine {
    text: String,
    from_user: bool,
}

/// Offline helper bot embedded in the teaching-resources view.
#[component]
pub fn Chatbot() -> impl IntoView {
    let lines = RwSignal::new(Vec::<BotLine>::new());
    let input = RwSignal::new(String::new());

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() {
            return;
        }
        let reply = canned_reply(&text);
        lines.update(|l| {
            l.push(BotLine {
                text: text.clone(),
                from_user: true,
            });
            l.push(BotLine {
                text: reply.to_owned(),
                from_user: false,
            });
        });
        input.set(String::new());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chatbot">
            <h3 class="chatbot__title">"Chatbot"</h3>
            <div class="chatbot__messages">
                {move || {
                    lines
                        .get()
                        .iter()
                        .map(|line| {
                            let text = line.text.clone();
                            let from_user = line.from_user;
                            view! {
                                <div class="chatbot__line" class:chatbot__line--user=from_user>
                                    <span class="chatbot__bubble">{text}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <div class="chatbot__input-row">
                <input
                    class="chatbot__input"
                    type="text"
                    placeholder="Ask me anything..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn chatbot__send" on:click=move |_| do_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
