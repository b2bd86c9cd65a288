use std::collections::HashSet;

use super::{hidden_count, toggle_member, visible_count};

// =============================================================
// Preview math
// =============================================================

#[test]
fn collapsed_list_caps_at_preview() {
    assert_eq!(visible_count(10, false, 3), 3);
    assert_eq!(visible_count(10, true, 3), 10);
}

#[test]
fn short_list_shows_everything_either_way() {
    assert_eq!(visible_count(2, false, 3), 2);
    assert_eq!(visible_count(2, true, 3), 2);
    assert_eq!(visible_count(0, false, 3), 0);
}

#[test]
fn hidden_count_never_underflows() {
    assert_eq!(hidden_count(10, 4), 6);
    assert_eq!(hidden_count(4, 4), 0);
    assert_eq!(hidden_count(2, 4), 0);
}

// =============================================================
// Expansion set
// =============================================================

#[test]
fn toggle_inserts_then_removes() {
    let mut set: HashSet<String> = HashSet::new();
    toggle_member(&mut set, "CSS".to_owned());
    assert!(set.contains("CSS"));
    toggle_member(&mut set, "CSS".to_owned());
    assert!(set.is_empty());
}

#[test]
fn toggle_keys_are_independent() {
    let mut set: HashSet<(String, String)> = HashSet::new();
    toggle_member(&mut set, ("Fundamentals".to_owned(), "HTML".to_owned()));
    toggle_member(&mut set, ("Fundamentals".to_owned(), "CSS".to_owned()));
    toggle_member(&mut set, ("Fundamentals".to_owned(), "HTML".to_owned()));
    assert!(!set.contains(&("Fundamentals".to_owned(), "HTML".to_owned())));
    assert!(set.contains(&("Fundamentals".to_owned(), "CSS".to_owned())));
}
