//! AI tutor page with chat, history, and feedback tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the tutor `ChatSession` for the lifetime of the route, so switching
//! tabs keeps the transcript while leaving the page drops it. The history
//! endpoint is only ever called from the explicit load action, never on
//! mount or tab switch.

use leptos::prelude::*;

use crate::components::chat_panel::{ChatKind, ChatPanel};
#[cfg(feature = "csr")]
use crate::net::api::ApiClient;
#[cfg(feature = "csr")]
use crate::state::chat::history_lines;
use crate::state::chat::{ChatSession, TUTOR_GREETING, TUTOR_WARMUP_MESSAGE};

/// Quick prompts offered above the chat input; clicking one fills the input.
const QUICK_SUGGESTIONS: [&str; 6] = [
    "Explain React Hooks",
    "How to improve student engagement?",
    "What is state management?",
    "Tips for lesson planning",
    "Explain REST APIs",
    "Classroom management strategies",
];

const STATS: [(&str, &str); 3] = [
    ("Sessions Completed", "24"),
    ("Average Rating", "4.8"),
    ("Learning Hours", "48"),
];

const FEATURES: [(&str, &str); 3] = [
    ("Programming Help", "Get detailed explanations of programming concepts with examples"),
    ("Teaching Strategies", "Learn effective teaching methods and classroom management"),
    ("Lesson Planning", "Get help with creating engaging and effective lesson plans"),
];

const FEEDBACK_ROWS: [(&str, &str, &str); 3] = [
    ("React Fundamentals", "5/5", "Excellent explanation of concepts"),
    ("JavaScript ES6", "4.5/5", "Very helpful examples"),
    ("API Design", "4.8/5", "Clear and concise teaching"),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum TutorTab {
    #[default]
    Chat,
    History,
    Feedback,
}

impl TutorTab {
    const ALL: [Self; 3] = [Self::Chat, Self::History, Self::Feedback];

    fn label(self) -> &'static str {
        match self {
            Self::Chat => "Chat",
            Self::History => "History",
            Self::Feedback => "Feedback",
        }
    }
}

#[component]
pub fn TutorPage() -> impl IntoView {
    let session = RwSignal::new(ChatSession::with_greeting(TUTOR_GREETING));
    let active_tab = RwSignal::new(TutorTab::default());
    let chat_input = RwSignal::new(String::new());

    let history = RwSignal::new(None::<Vec<String>>);
    let history_busy = RwSignal::new(false);
    let history_error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    let client = expect_context::<ApiClient>();

    // Scoped with the session: tab switches remount the chat panel without
    // touching this flag, so in-flight replies still land.
    let alive = {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_cleanup = alive.clone();
        on_cleanup(move || alive_cleanup.store(false, std::sync::atomic::Ordering::Relaxed));
        alive
    };

    // One health probe per page visit, result cached on the session.
    #[cfg(feature = "csr")]
    {
        let client = client.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let ok = client.check_health().await.unwrap_or(false);
            if alive.load(std::sync::atomic::Ordering::Relaxed) {
                session.update(|s| s.record_health(ok));
            }
        });
    }

    #[cfg(feature = "csr")]
    let on_load_history = {
        let client = client.clone();
        let alive = alive.clone();
        Callback::new(move |()| {
            if history_busy.get() {
                return;
            }
            history_busy.set(true);
            history_error.set(None);
            let client = client.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let outcome = client.fetch_chat_history().await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match outcome {
                    Ok(body) => history.set(Some(history_lines(&body))),
                    Err(err) => history_error.set(Some(err.to_string())),
                }
                history_busy.set(false);
            });
        })
    };
    #[cfg(not(feature = "csr"))]
    let on_load_history = Callback::new(move |()| {});

    view! {
        <div class="tutor">
            <header class="tutor__header">
                <h1 class="tutor__title">"AI Tutor"</h1>
            </header>

            <div class="tutor__tabs">
                {TutorTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="tutor__tab"
                                class:tutor__tab--active=move || active_tab.get() == tab
                                on:click=move |_| active_tab.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="tutor__stats">
                {STATS
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="tutor__stat">
                                <h3 class="tutor__stat-label">{label}</h3>
                                <p class="tutor__stat-value">{value}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="tutor__body">
                {move || match active_tab.get() {
                    TutorTab::Chat => chat_tab(session, chat_input, alive.clone()).into_any(),
                    TutorTab::History => {
                        history_tab(history, history_busy, history_error, on_load_history).into_any()
                    }
                    TutorTab::Feedback => feedback_tab().into_any(),
                }}
            </div>
        </div>
    }
}

fn chat_tab(
    session: RwSignal<ChatSession>,
    input: RwSignal<String>,
    alive: std::sync::Arc<std::sync::atomic::AtomicBool>,
) -> impl IntoView {
    view! {
        <div class="tutor__chat">
            <Show when=move || session.get().backend_ready == Some(false)>
                <div class="tutor__warmup">{TUTOR_WARMUP_MESSAGE}</div>
            </Show>

            <div class="tutor__suggestions">
                {QUICK_SUGGESTIONS
                    .into_iter()
                    .map(|question| {
                        view! {
                            <button
                                class="tutor__suggestion"
                                on:click=move |_| input.set(question.to_owned())
                            >
                                {question}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <ChatPanel
                session=session
                kind=ChatKind::Tutor
                alive=alive
                placeholder="Ask about programming or teaching strategies..."
                input=input
            />

            <div class="tutor__features">
                {FEATURES
                    .into_iter()
                    .map(|(title, blurb)| {
                        view! {
                            <div class="tutor__feature">
                                <h3 class="tutor__feature-title">{title}</h3>
                                <p class="tutor__feature-blurb">{blurb}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

fn history_tab(
    history: RwSignal<Option<Vec<String>>>,
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    on_load: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="tutor__history">
            <button
                class="btn btn--primary tutor__history-load"
                on:click=move |_| on_load.run(())
                disabled=move || busy.get()
            >
                {move || if busy.get() { "Loading..." } else { "Load history" }}
            </button>

            <Show when=move || error.get().is_some()>
                <p class="tutor__history-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            {move || match history.get() {
                None => view! {
                    <p class="tutor__history-hint">"Past conversations are only fetched on request."</p>
                }
                    .into_any(),
                Some(lines) if lines.is_empty() => {
                    view! { <p class="tutor__history-hint">"No previous conversations."</p> }.into_any()
                }
                Some(lines) => view! {
                    <ul class="tutor__history-list">
                        {lines
                            .iter()
                            .map(|line| view! { <li>{line.clone()}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                    .into_any(),
            }}
        </div>
    }
}

fn feedback_tab() -> impl IntoView {
    view! {
        <div class="tutor__feedback">
            <h2 class="tutor__feedback-title">"Session Feedback"</h2>
            <div class="tutor__feedback-grid">
                {FEEDBACK_ROWS
                    .into_iter()
                    .map(|(topic, rating, note)| {
                        view! {
                            <div class="tutor__feedback-card">
                                <div class="tutor__feedback-head">
                                    <h3 class="tutor__feedback-topic">{topic}</h3>
                                    <span class="tutor__feedback-rating">{rating}</span>
                                </div>
                                <p class="tutor__feedback-note">{note}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
