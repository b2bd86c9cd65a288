//! Client-side state modules held in Leptos signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs with synchronous transitions: the owning page creates an
//! `RwSignal` around them, components call methods through `update`, and the
//! async boundary stays in the components that talk to `net`.

pub mod chat;
pub mod quiz;
pub mod wizard;
