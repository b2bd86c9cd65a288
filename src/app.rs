//! Application shell: router, head metadata, and shared context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides the API client to the whole tree and maps routes onto
//! pages. Pages own all interactive state; the client is the only piece of
//! global context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::net::api::{ApiClient, ApiConfig};
use crate::pages::home::HomePage;
use crate::pages::start_learning::StartLearningPage;
use crate::pages::tutor::TutorPage;

/// Root component wiring routes and shared context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new(ApiConfig::from_document()));

    view! {
        <Title text="CourseCraft" />
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p class="app__missing">"Page not found."</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/start-learning") view=StartLearningPage />
                    <Route path=path!("/tutor") view=TutorPage />
                </Routes>
            </main>
        </Router>
    }
}
