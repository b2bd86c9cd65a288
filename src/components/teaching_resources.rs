//! Curated teaching-resource links with the embedded chatbot.

use leptos::prelude::*;

use crate::catalog::ResourceLink;
use crate::components::chatbot::Chatbot;

/// External reading list plus the offline helper bot.
#[component]
pub fn TeachingResources(resources: Vec<ResourceLink>) -> impl IntoView {
    view! {
        <div class="teaching-resources">
            <h3 class="teaching-resources__title">"Teaching Resources"</h3>
            <ul class="teaching-resources__list">
                {resources
                    .iter()
                    .map(|link| {
                        let name = link.name.clone();
                        let url = link.url.clone();
                        view! {
                            <li>
                                <a href=url target="_blank" rel="noopener noreferrer">
                                    {name}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <Chatbot />
        </div>
    }
}
