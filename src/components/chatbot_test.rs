use super::{FALLBACK_REPLY, canned_reply};

#[test]
fn known_questions_get_canned_answers() {
    assert_eq!(
        canned_reply("I need help with lesson planning"),
        "You can check out resources on Edutopia for lesson planning ideas."
    );
    assert_eq!(
        canned_reply("What tools can I use for assessments?"),
        "Coursera offers courses on assessment tools and techniques."
    );
}

#[test]
fn unknown_question_gets_fallback() {
    assert_eq!(canned_reply("What is Rust?"), FALLBACK_REPLY);
}

#[test]
fn lookup_is_exact_match() {
    // Even near-misses fall through; there is no fuzzy matching.
    assert_eq!(canned_reply("i need help with lesson planning"), FALLBACK_REPLY);
    assert_eq!(canned_reply("I need help with lesson planning "), FALLBACK_REPLY);
}
