//! Checkbox picker for career skills.
//!
//! DESIGN
//! ======
//! Selections are drafted locally and only reach the wizard when the user
//! confirms with "Show Learning Path". Leaving the stage before confirming
//! therefore discards the draft along with the rest of the stage state.

use std::collections::HashSet;

use leptos::prelude::*;

use crate::util::expand::toggle_member;

/// Skill checklist with a confirm button.
///
/// `on_selected` receives the draft set when the user confirms.
#[component]
pub fn SkillSelection(
    skills: &'static [&'static str],
    on_selected: Callback<HashSet<String>>,
) -> impl IntoView {
    let draft = RwSignal::new(HashSet::<String>::new());

    view! {
        <div class="skill-select">
            <h3 class="skill-select__title">"Select Skills"</h3>
            <div class="skill-select__list">
                {skills
                    .iter()
                    .map(|skill| {
                        let name = (*skill).to_owned();
                        let check_name = name.clone();
                        view! {
                            <label class="skill-select__item">
                                <input
                                    type="checkbox"
                                    prop:checked=move || draft.get().contains(&check_name)
                                    on:change={
                                        let name = name.clone();
                                        move |_| draft.update(|set| toggle_member(set, name.clone()))
                                    }
                                />
                                <span class="skill-select__name">{*skill}</span>
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <button
                class="btn btn--primary skill-select__submit"
                on:click=move |_| on_selected.run(draft.get())
            >
                "Show Learning Path"
            </button>
        </div>
    }
}
