//! Student performance panel rendered as horizontal score bars.

#[cfg(test)]
#[path = "performance_panel_test.rs"]
mod performance_panel_test;

use leptos::prelude::*;

use crate::catalog::StudentScore;

/// Bar width for a score, clamped to the 0-100 track.
fn bar_width(score: u32) -> u32 {
    score.min(100)
}

/// Per-student score bars for the monitoring view.
#[component]
pub fn PerformancePanel(scores: Vec<StudentScore>) -> impl IntoView {
    view! {
        <div class="performance">
            <h3 class="performance__title">"Student Performance Dashboard"</h3>
            <div class="performance__rows">
                {scores
                    .iter()
                    .map(|student| {
                        let width = format!("{}%", bar_width(student.score));
                        view! {
                            <div class="performance__row">
                                <span class="performance__name">{student.name}</span>
                                <div class="performance__track">
                                    <div class="performance__bar" style:width=width></div>
                                </div>
                                <span class="performance__score">{student.score}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
