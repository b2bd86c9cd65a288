//! Earned-rewards list for the gamified flow.

use leptos::prelude::*;

/// Bulleted list of earned rewards, with an empty-state line.
#[component]
pub fn RewardsList(rewards: Vec<String>) -> impl IntoView {
    view! {
        <div class="rewards">
            <h3 class="rewards__title">"Your Rewards"</h3>
            <ul class="rewards__list">
                {if rewards.is_empty() {
                    view! { <li class="rewards__empty">"No rewards yet!"</li> }.into_any()
                } else {
                    rewards
                        .iter()
                        .map(|reward| {
                            view! {
                                <li class="rewards__item">
                                    <span class="rewards__icon">"🎉"</span>
                                    {reward.clone()}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </ul>
        </div>
    }
}
