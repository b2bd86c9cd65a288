//! Landing page with hero copy, navigation cards, and the support chat.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the unauthenticated entry route. Everything here is static apart
//! from the collapsible support chat, whose transcript lives only as long
//! as the page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::chat_panel::{ChatKind, ChatPanel};
use crate::state::chat::ChatSession;

#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();
    let support = RwSignal::new(ChatSession::new());
    let support_open = RwSignal::new(false);
    let support_input = RwSignal::new(String::new());

    // Scoped with the session: collapsing the widget remounts the panel
    // without touching this flag, so in-flight replies still land.
    let support_alive = {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_cleanup = alive.clone();
        on_cleanup(move || alive_cleanup.store(false, std::sync::atomic::Ordering::Relaxed));
        alive
    };

    let on_start = move |_| {
        navigate("/start-learning", NavigateOptions::default());
    };

    view! {
        <div class="home">
            <div class="home__hero">
                <h1 class="home__brand">"CourseCraft"</h1>
                <h2 class="home__tagline">"Your personalized AI tutor for all domains"</h2>
                <p class="home__subtitle">"Explore and start using our platform"</p>
                <button class="btn btn--primary home__start" on:click=on_start>
                    "Start Learning"
                </button>
            </div>

            <div class="home__cards">
                <a class="home__card" href="/tutor">
                    <span class="home__card-icon">"🤖"</span>
                    <h3 class="home__card-title">"AI Tutor"</h3>
                </a>
                <a class="home__card" href="/start-learning">
                    <span class="home__card-icon">"🧭"</span>
                    <h3 class="home__card-title">"Learning Path"</h3>
                </a>
            </div>

            <div class="home__support" class:home__support--open=move || support_open.get()>
                <button
                    class="btn home__support-toggle"
                    on:click=move |_| support_open.update(|open| *open = !*open)
                >
                    {move || if support_open.get() { "Close support chat" } else { "Support chat" }}
                </button>
                <Show when=move || support_open.get()>
                    <ChatPanel
                        session=support
                        kind=ChatKind::Support
                        alive=support_alive.clone()
                        input=support_input
                    />
                </Show>
            </div>
        </div>
    }
}
