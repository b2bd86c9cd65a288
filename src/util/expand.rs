//! Preview/expand math for collapsible lists.

#[cfg(test)]
#[path = "expand_test.rs"]
mod expand_test;

use std::collections::HashSet;
use std::hash::Hash;

/// Number of leading items to render for a collapsible list.
pub fn visible_count(total: usize, expanded: bool, preview: usize) -> usize {
    if expanded { total } else { total.min(preview) }
}

/// Items hidden behind the expand control while collapsed.
pub fn hidden_count(total: usize, preview: usize) -> usize {
    total.saturating_sub(preview)
}

/// Toggle membership of `key` in an expansion set.
pub fn toggle_member<T: Eq + Hash>(set: &mut HashSet<T>, key: T) {
    if !set.remove(&key) {
        set.insert(key);
    }
}
