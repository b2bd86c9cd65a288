//! Ordered learning-path chain for the selected career skills.
//!
//! DESIGN
//! ======
//! The path is a straight chain rendered top to bottom: the first skill is
//! the entry node and every edge connects one skill to the next. No layout
//! engine is involved; the chain shape makes positions trivial.

#[cfg(test)]
#[path = "flow_chart_test.rs"]
mod flow_chart_test;

use leptos::prelude::*;

/// Directed edges between consecutive skills, starting at the first one.
fn chain_edges(skills: &[String]) -> Vec<(String, String)> {
    skills
        .windows(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect()
}

/// Vertical chain of skill nodes joined by arrows.
#[component]
pub fn FlowChart(skills: Vec<String>) -> impl IntoView {
    view! {
        <div class="flow-chart">
            {match skills.first() {
                None => view! { <p class="flow-chart__empty">"No skills selected"</p> }.into_any(),
                Some(first) => {
                    let first = first.clone();
                    let rest = chain_edges(&skills)
                        .into_iter()
                        .map(|(_, target)| {
                            view! {
                                <div class="flow-chart__edge" aria-hidden="true">"↓"</div>
                                <div class="flow-chart__node">{target}</div>
                            }
                        })
                        .collect::<Vec<_>>();
                    view! {
                        <div class="flow-chart__node">{first}</div>
                        {rest}
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
