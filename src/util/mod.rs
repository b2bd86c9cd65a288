//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate rendering-adjacent pure logic from page and
//! component modules to improve reuse and testability.

pub mod expand;
pub mod markdown;
