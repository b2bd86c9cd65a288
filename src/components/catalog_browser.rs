//! Collapsible browser over the learning-path catalog.
//!
//! DESIGN
//! ======
//! Every section and every entry owns an independent expand toggle; opening
//! one never collapses another. Entry toggles are keyed by section title
//! plus entry key, so a key like "JavaScript" could appear in two sections
//! without the toggles interfering.

#[cfg(test)]
#[path = "catalog_browser_test.rs"]
mod catalog_browser_test;

use std::collections::HashSet;

use leptos::prelude::*;

use crate::catalog::{ContentEntry, Section, Topic};
use crate::util::expand::{hidden_count, toggle_member, visible_count};

/// Entries shown per section before expansion.
const SECTION_PREVIEW_LIMIT: usize = 3;

/// Topic chips shown per entry before expansion.
const TOPIC_PREVIEW_LIMIT: usize = 4;

fn section_expand_label(expanded: bool, total: usize) -> String {
    if expanded {
        "Show Less".to_owned()
    } else {
        format!("+{} More", hidden_count(total, SECTION_PREVIEW_LIMIT))
    }
}

fn topic_expand_label(expanded: bool, total: usize) -> String {
    if expanded {
        "Show Less".to_owned()
    } else {
        format!("+{} more", hidden_count(total, TOPIC_PREVIEW_LIMIT))
    }
}

/// Sectioned catalog view with per-section and per-entry expansion.
#[component]
pub fn CatalogBrowser(sections: &'static [Section]) -> impl IntoView {
    let expanded_sections = RwSignal::new(HashSet::<String>::new());
    let expanded_entries = RwSignal::new(HashSet::<(String, String)>::new());

    view! {
        <div class="catalog">
            {move || {
                let open_sections = expanded_sections.get();
                let open_entries = expanded_entries.get();
                let last = sections.len().saturating_sub(1);

                sections
                    .iter()
                    .enumerate()
                    .map(|(index, section)| {
                        let title = section.title.clone();
                        let total = section.entries.len();
                        let is_open = open_sections.contains(&title);
                        let toggle_title = title.clone();

                        view! {
                            <div class="catalog__section">
                                <h3 class="catalog__section-title">
                                    {title.clone()}
                                    <Show when={move || total > SECTION_PREVIEW_LIMIT}>
                                        <button
                                            class="catalog__expand"
                                            on:click={
                                                let key = toggle_title.clone();
                                                move |_| {
                                                    expanded_sections.update(|set| toggle_member(set, key.clone()));
                                                }
                                            }
                                        >
                                            {section_expand_label(is_open, total)}
                                        </button>
                                    </Show>
                                </h3>
                                <div class="catalog__grid">
                                    {section
                                        .entries
                                        .iter()
                                        .take(visible_count(total, is_open, SECTION_PREVIEW_LIMIT))
                                        .map(|entry| {
                                            entry_card(
                                                title.clone(),
                                                entry,
                                                open_entries.contains(&(title.clone(), entry.key.clone())),
                                                expanded_entries,
                                            )
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                                <Show when=move || index < last>
                                    <div class="catalog__divider"></div>
                                </Show>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

fn entry_card(
    section_title: String,
    entry: &'static ContentEntry,
    is_open: bool,
    expanded_entries: RwSignal<HashSet<(String, String)>>,
) -> impl IntoView {
    let toggle_key = (section_title, entry.key.clone());
    let total = entry.topics.len();
    let has_resources = !entry.resources.is_empty();

    view! {
        <div class="catalog__entry">
            <h4 class="catalog__entry-title">{entry.key.clone()}</h4>
            <div class="catalog__chips">
                {entry
                    .topics
                    .iter()
                    .take(visible_count(total, is_open, TOPIC_PREVIEW_LIMIT))
                    .map(topic_chip)
                    .collect::<Vec<_>>()}
                <Show when={move || total > TOPIC_PREVIEW_LIMIT}>
                    <button
                        class="catalog__expand"
                        on:click={
                            let key = toggle_key.clone();
                            move |_| expanded_entries.update(|set| toggle_member(set, key.clone()))
                        }
                    >
                        {topic_expand_label(is_open, total)}
                    </button>
                </Show>
            </div>
            <div class="catalog__entry-detail">
                <p class="catalog__entry-description">{entry.description.clone()}</p>
                <Show when=move || has_resources>
                    <h5 class="catalog__resources-title">"Resources:"</h5>
                </Show>
                <ul class="catalog__resources">
                    {entry
                        .resources
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a href=link.url.clone() target="_blank" rel="noopener noreferrer">
                                        {link.name.clone()}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </div>
    }
}

fn topic_chip(topic: &'static Topic) -> impl IntoView {
    match topic.links.first() {
        Some(link) => view! {
            <a class="catalog__chip" href=link.url.clone() target="_blank" rel="noopener noreferrer">
                {topic.title.clone()}
            </a>
        }
        .into_any(),
        None => view! { <span class="catalog__chip">{topic.title.clone()}</span> }.into_any(),
    }
}
