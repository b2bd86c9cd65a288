use super::*;
use crate::net::api::ApiError;
use serde_json::json;

fn warmup_error() -> ApiError {
    ApiError::WarmingUp
}

fn status_error(status: u16, status_text: &str) -> ApiError {
    ApiError::Status {
        status,
        status_text: status_text.to_owned(),
        body: None,
    }
}

// =============================================================
// Submission guards
// =============================================================

#[test]
fn submit_whitespace_is_a_no_op() {
    let mut session = ChatSession::new();
    assert_eq!(session.submit("   \n"), None);
    assert!(session.turns.is_empty());
    assert!(!session.pending);
}

#[test]
fn submit_while_pending_is_dropped_not_queued() {
    let mut session = ChatSession::new();
    assert_eq!(session.submit("first"), Some("first".to_owned()));
    assert_eq!(session.submit("second"), None);
    assert_eq!(session.turns.len(), 1);
    assert_eq!(session.turns[0].text, "first");
}

#[test]
fn submit_keeps_the_raw_turn_and_trims_the_payload() {
    let mut session = ChatSession::new();
    assert_eq!(session.submit("  hello  "), Some("hello".to_owned()));
    assert_eq!(session.turns.len(), 1);
    assert_eq!(session.turns[0].role, TurnRole::User);
    assert_eq!(session.turns[0].text, "  hello  ");
    assert!(session.pending);
}

#[test]
fn turn_ids_are_unique() {
    let mut session = ChatSession::new();
    session.submit("one");
    session.receive_reply("two".to_owned());
    assert_ne!(session.turns[0].id, session.turns[1].id);
}

// =============================================================
// Companion turns
// =============================================================

#[test]
fn every_accepted_submission_gets_exactly_one_companion_turn() {
    let mut session = ChatSession::new();
    session.submit("question");
    resolve_tutor_outcome(&mut session, Ok(json!({ "response": "42" })));
    assert_eq!(session.turns.len(), 2);
    assert_eq!(session.turns[1].role, TurnRole::Assistant);
    assert_eq!(session.turns[1].text, "42");
    assert!(!session.pending);
}

#[test]
fn late_resolution_reopens_the_session_for_input() {
    let mut session = ChatSession::new();
    assert_eq!(session.submit("hi"), Some("hi".to_owned()));
    assert_eq!(session.submit("anyone?"), None);

    // However long the request was in flight, its resolution must land on
    // the surviving session and lift the pending guard.
    resolve_tutor_outcome(&mut session, Ok(json!({ "message": "hello" })));
    assert!(!session.pending);
    assert_eq!(session.submit("anyone?"), Some("anyone?".to_owned()));

    resolve_tutor_outcome(&mut session, Err(status_error(502, "Bad Gateway")));
    assert!(!session.pending);
    let roles: Vec<TurnRole> = session.turns.iter().map(|turn| turn.role).collect();
    assert_eq!(
        roles,
        vec![TurnRole::User, TurnRole::Assistant, TurnRole::User, TurnRole::System]
    );
}

#[test]
fn reply_clears_pending_and_last_error() {
    let mut session = ChatSession::new();
    session.submit("a");
    session.receive_failure("boom".to_owned());
    assert_eq!(session.last_error.as_deref(), Some("boom"));
    session.submit("b");
    session.receive_reply("ok".to_owned());
    assert_eq!(session.last_error, None);
    assert!(!session.pending);
}

#[test]
fn greeting_seeds_a_single_assistant_turn() {
    let session = ChatSession::with_greeting(TUTOR_GREETING);
    assert_eq!(session.turns.len(), 1);
    assert_eq!(session.turns[0].role, TurnRole::Assistant);
    assert_eq!(session.turns[0].text, TUTOR_GREETING);
    assert!(!session.pending);
}

// =============================================================
// Reply extraction
// =============================================================

#[test]
fn reply_text_accepts_message_field() {
    assert_eq!(reply_text(&json!({ "message": "hi" })), Some("hi".to_owned()));
}

#[test]
fn reply_text_accepts_response_field() {
    assert_eq!(reply_text(&json!({ "response": "hi" })), Some("hi".to_owned()));
}

#[test]
fn reply_text_rejects_missing_or_non_string_fields() {
    assert_eq!(reply_text(&json!({})), None);
    assert_eq!(reply_text(&json!({ "response": 7 })), None);
    assert_eq!(reply_text(&json!({ "data": { "response": "hi" } })), None);
}

// =============================================================
// Tutor outcome mapping
// =============================================================

#[test]
fn tutor_empty_body_becomes_invalid_reply_system_turn() {
    let mut session = ChatSession::new();
    session.submit("q");
    resolve_tutor_outcome(&mut session, Ok(json!({})));
    assert_eq!(session.turns.len(), 2);
    assert_eq!(session.turns[1].role, TurnRole::System);
    assert_eq!(session.turns[1].text, TUTOR_INVALID_REPLY_MESSAGE);
    assert!(!session.pending);
}

#[test]
fn tutor_warmup_error_becomes_warmup_system_turn() {
    let mut session = ChatSession::new();
    session.submit("q");
    resolve_tutor_outcome(&mut session, Err(warmup_error()));
    assert_eq!(session.turns[1].role, TurnRole::System);
    assert_eq!(session.turns[1].text, TUTOR_WARMUP_MESSAGE);
}

#[test]
fn tutor_other_errors_become_unreachable_system_turn() {
    let mut session = ChatSession::new();
    session.submit("q");
    resolve_tutor_outcome(&mut session, Err(status_error(500, "Internal Server Error")));
    assert_eq!(session.turns[1].text, TUTOR_UNREACHABLE_MESSAGE);

    let mut session = ChatSession::new();
    session.submit("q");
    resolve_tutor_outcome(&mut session, Err(ApiError::Transport("connection refused".to_owned())));
    assert_eq!(session.turns[1].text, TUTOR_UNREACHABLE_MESSAGE);
}

// =============================================================
// Support-chat outcome mapping
// =============================================================

#[test]
fn chat_failure_surfaces_http_layer_message() {
    let mut session = ChatSession::new();
    session.submit("q");
    resolve_chat_outcome(&mut session, Err(status_error(500, "Internal Server Error")));
    assert_eq!(session.turns[1].role, TurnRole::System);
    assert_eq!(session.turns[1].text, "API call failed: Internal Server Error");
}

#[test]
fn chat_warmup_surfaces_warmup_message() {
    let mut session = ChatSession::new();
    session.submit("q");
    resolve_chat_outcome(&mut session, Err(warmup_error()));
    assert_eq!(session.turns[1].text, "Server is warming up, please try again in a moment.");
}

#[test]
fn chat_invalid_body_uses_generic_invalid_reply() {
    let mut session = ChatSession::new();
    session.submit("q");
    resolve_chat_outcome(&mut session, Ok(json!({ "ok": true })));
    assert_eq!(session.turns[1].text, CHAT_INVALID_REPLY_MESSAGE);
}

// =============================================================
// Health probe
// =============================================================

#[test]
fn record_health_stores_outcome() {
    let mut session = ChatSession::new();
    assert_eq!(session.backend_ready, None);
    session.record_health(false);
    assert_eq!(session.backend_ready, Some(false));
    session.record_health(true);
    assert_eq!(session.backend_ready, Some(true));
}

// =============================================================
// History flattening
// =============================================================

#[test]
fn history_lines_accepts_string_arrays() {
    let lines = history_lines(&json!(["a", "b"]));
    assert_eq!(lines, vec!["a".to_owned(), "b".to_owned()]);
}

#[test]
fn history_lines_accepts_object_arrays() {
    let lines = history_lines(&json!([
        { "message": "first" },
        { "response": "second" },
        { "text": "third" },
        { "role": "user" }
    ]));
    assert_eq!(lines, vec!["first".to_owned(), "second".to_owned(), "third".to_owned()]);
}

#[test]
fn history_lines_unwraps_history_envelope() {
    let lines = history_lines(&json!({ "history": ["only"] }));
    assert_eq!(lines, vec!["only".to_owned()]);
}

#[test]
fn history_lines_tolerates_unknown_shapes() {
    assert!(history_lines(&json!("nope")).is_empty());
    assert!(history_lines(&json!({ "count": 3 })).is_empty());
    assert!(history_lines(&json!(null)).is_empty());
}
