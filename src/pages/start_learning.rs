//! Guided learning wizard walking role, purpose, and content stages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns one `WizardState` signal per mount; leaving the route
//! discards the whole walk. Stage is derived from the selections, so back
//! navigation is just clearing fields.
//!
//! DESIGN
//! ======
//! Stage and content views subscribe through memos keyed on the selections
//! rather than the raw state. Skill and reward updates therefore re-render
//! only their own leaf views; the quiz and skill picker keep their local
//! state instead of being remounted mid-interaction.

use std::collections::HashSet;

use leptos::prelude::*;

use crate::catalog::{Role, career_skills, purposes_for, quiz_questions};
use crate::components::catalog_browser::CatalogBrowser;
use crate::components::flow_chart::FlowChart;
use crate::components::performance_panel::PerformancePanel;
use crate::components::quiz::GamifiedQuiz;
use crate::components::rewards::RewardsList;
use crate::components::skill_selection::SkillSelection;
use crate::components::teaching_resources::TeachingResources;
use crate::components::topic_grid::TopicGrid;
use crate::state::wizard::{ContentBody, WizardStage, WizardState, dispatch_content};

#[component]
pub fn StartLearningPage() -> impl IntoView {
    let wizard = RwSignal::new(WizardState::default());
    let stage = Memo::new(move |_| wizard.get().stage());

    view! {
        <div class="wizard">
            {move || match stage.get() {
                WizardStage::RoleSelect => role_stage(wizard).into_any(),
                WizardStage::PurposeSelect => purpose_stage(wizard).into_any(),
                WizardStage::Content => content_stage(wizard).into_any(),
            }}
        </div>
    }
}

fn role_stage(wizard: RwSignal<WizardState>) -> impl IntoView {
    view! {
        <div class="wizard__roles">
            <h2 class="wizard__heading">"Choose Your Role"</h2>
            <div class="wizard__role-cards">
                {[Role::Student, Role::Teacher]
                    .into_iter()
                    .map(|role| {
                        let icon = match role {
                            Role::Student => "👨‍🎓",
                            Role::Teacher => "👨‍🏫",
                        };
                        view! {
                            <button
                                class="wizard__role-card"
                                on:click=move |_| wizard.update(|w| w.select_role(role))
                            >
                                <span class="wizard__role-icon">{icon}</span>
                                <h3 class="wizard__role-name">{role.label()}</h3>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

fn purpose_stage(wizard: RwSignal<WizardState>) -> impl IntoView {
    // Role cannot change while this stage is mounted; read it once.
    let purposes = wizard
        .get_untracked()
        .role
        .map(purposes_for)
        .unwrap_or_default();

    view! {
        <div class="wizard__purposes">
            <button class="wizard__back" on:click=move |_| wizard.update(WizardState::back)>
                "← Back to role selection"
            </button>
            <h2 class="wizard__heading">"Why do you want to join us?"</h2>
            <div class="wizard__purpose-grid">
                {purposes
                    .iter()
                    .map(|purpose| {
                        let selected = purpose.clone();
                        view! {
                            <button
                                class="wizard__purpose-card"
                                on:click=move |_| {
                                    let purpose = selected.clone();
                                    wizard.update(|w| w.select_purpose(purpose));
                                }
                            >
                                <span class="wizard__purpose-icon">{purpose.icon}</span>
                                <h3 class="wizard__purpose-title">{purpose.title}</h3>
                                <p class="wizard__purpose-description">{purpose.description}</p>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

fn content_stage(wizard: RwSignal<WizardState>) -> impl IntoView {
    let selection = Memo::new(move |_| {
        let state = wizard.get();
        (state.role, state.purpose.clone())
    });

    view! {
        <div class="wizard__content">
            <button class="wizard__back" on:click=move |_| wizard.update(WizardState::back)>
                "← Back to purposes"
            </button>
            {move || {
                let (role, purpose) = selection.get();
                let Some(purpose) = purpose else {
                    return ().into_any();
                };
                let content = dispatch_content(role, &purpose);

                let body = match content.body {
                    ContentBody::Paths(sections) => {
                        view! { <CatalogBrowser sections=sections /> }.into_any()
                    }
                    ContentBody::TopicCards(cards) => view! { <TopicGrid cards=cards /> }.into_any(),
                    ContentBody::SkillPicker => skill_picker_body(wizard).into_any(),
                    ContentBody::Quiz => quiz_body(wizard).into_any(),
                    ContentBody::Resources(links) => {
                        view! { <TeachingResources resources=links /> }.into_any()
                    }
                    ContentBody::Scores(scores) => {
                        view! { <PerformancePanel scores=scores /> }.into_any()
                    }
                    ContentBody::Empty => ().into_any(),
                };

                view! {
                    <div class="wizard__content-header">
                        <h2 class="wizard__heading">{content.heading}</h2>
                        <p class="wizard__description">{content.description}</p>
                    </div>
                    {body}
                }
                    .into_any()
            }}
        </div>
    }
}

fn skill_picker_body(wizard: RwSignal<WizardState>) -> impl IntoView {
    let on_selected = Callback::new(move |picked: HashSet<String>| {
        wizard.update(|w| w.set_selected_skills(picked));
    });

    view! {
        <SkillSelection skills=career_skills() on_selected=on_selected />
        {move || {
            let ordered = wizard.get().ordered_skills();
            (!ordered.is_empty()).then(|| view! { <FlowChart skills=ordered /> })
        }}
    }
}

fn quiz_body(wizard: RwSignal<WizardState>) -> impl IntoView {
    let on_award = Callback::new(move |reward: String| {
        wizard.update(|w| w.award(reward));
    });

    view! {
        <GamifiedQuiz questions=quiz_questions() on_award=on_award />
        {move || view! { <RewardsList rewards=wizard.get().earned_rewards.clone() /> }}
    }
}
