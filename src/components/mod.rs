//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render conversation and wizard surfaces while reading/writing
//! shared state from Leptos context providers and page-owned signals.

pub mod catalog_browser;
pub mod chat_panel;
pub mod chatbot;
pub mod flow_chart;
pub mod performance_panel;
pub mod quiz;
pub mod rewards;
pub mod skill_selection;
pub mod teaching_resources;
pub mod topic_grid;
