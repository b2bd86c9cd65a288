//! Icon-card grid for fixed activity sets (exam prep, course tools).

use leptos::prelude::*;

use crate::catalog::TopicCard;

/// Grid of icon + title cards, one per activity.
#[component]
pub fn TopicGrid(cards: &'static [TopicCard]) -> impl IntoView {
    view! {
        <div class="topic-grid">
            {cards
                .iter()
                .map(|card| {
                    view! {
                        <div class="topic-grid__card">
                            <span class="topic-grid__icon">{card.icon}</span>
                            <h3 class="topic-grid__title">{card.title}</h3>
                            <button class="btn btn--primary topic-grid__start">"Start Learning"</button>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
