//! Interactive quiz for the gamified learning flow.
//!
//! DESIGN
//! ======
//! Quiz progress lives in a local [`QuizState`] signal and resets with the
//! component. When a run completes, its rewards are reported outward through
//! `on_award`, so the surrounding rewards list keeps entries from every
//! finished run while the quiz itself restarts clean.

use leptos::prelude::*;

use crate::catalog::QuizQuestion;
use crate::components::rewards::RewardsList;
use crate::state::quiz::QuizState;

/// Multiple-choice quiz with a progress bar and completion screen.
#[component]
pub fn GamifiedQuiz(questions: &'static [QuizQuestion], on_award: Callback<String>) -> impl IntoView {
    let quiz = RwSignal::new(QuizState::default());

    let answer = move |choice: &'static str| {
        let was_completed = quiz.get().completed;
        quiz.update(|q| q.answer(questions, choice));
        let state = quiz.get();
        if !was_completed && state.completed {
            for earned in &state.rewards {
                on_award.run(earned.clone());
            }
        }
    };

    view! {
        <div class="quiz">
            {move || {
                let state = quiz.get();
                if state.completed {
                    let score_line = format!("Your score: {} / {}", state.score, questions.len());
                    return view! {
                        <div class="quiz__done">
                            <h2 class="quiz__done-title">"🎉 Quiz Completed!"</h2>
                            <p class="quiz__score">{score_line}</p>
                            <RewardsList rewards=state.rewards.clone() />
                            <button
                                class="btn btn--primary quiz__restart"
                                on:click=move |_| quiz.update(QuizState::restart)
                            >
                                "Restart"
                            </button>
                        </div>
                    }
                        .into_any();
                }

                match questions.get(state.current) {
                    None => view! { <div class="quiz__empty">"No questions available"</div> }.into_any(),
                    Some(question) => view! {
                        <div class="quiz__question">
                            <h2 class="quiz__prompt">{question.prompt}</h2>
                            <div class="quiz__options">
                                {question
                                    .options
                                    .iter()
                                    .copied()
                                    .map(|option| {
                                        view! {
                                            <button class="btn quiz__option" on:click=move |_| answer(option)>
                                                {option}
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                            <div class="quiz__progress">
                                <div
                                    class="quiz__progress-fill"
                                    style:width=move || {
                                        format!("{}%", quiz.get().progress_percent(questions.len()))
                                    }
                                ></div>
                            </div>
                        </div>
                    }
                        .into_any(),
                }
            }}
        </div>
    }
}
