//! Conversational session state for the tutor and support chat surfaces.
//!
//! DESIGN
//! ======
//! A session is a plain struct held in an `RwSignal` by whichever view owns
//! it. All transitions are synchronous and pure; the owning component does
//! the async send and feeds the outcome back through [`resolve_tutor_outcome`]
//! or [`resolve_chat_outcome`]. The transcript is append-only and every
//! accepted submission ends in exactly one companion turn (assistant on
//! success, system on failure).

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde_json::Value;

use crate::net::api::ApiError;

/// Greeting seeded into the tutor transcript before any request is made.
pub const TUTOR_GREETING: &str =
    "Hi! I'm your AI learning assistant. I can help with both programming concepts and teaching strategies!";

/// Shown when the tutor backend answers 503/504 during cold start.
pub const TUTOR_WARMUP_MESSAGE: &str = "AI Tutor is warming up, please try again in a moment.";

/// Shown when the tutor call fails for any non-warm-up reason.
pub const TUTOR_UNREACHABLE_MESSAGE: &str = "Could not connect to AI Tutor. Please try again.";

/// Shown when a 2xx tutor response body carries no reply field.
pub const TUTOR_INVALID_REPLY_MESSAGE: &str = "AI Tutor sent an unexpected reply. Please try again.";

/// Shown when a 2xx support-chat response body carries no reply field.
pub const CHAT_INVALID_REPLY_MESSAGE: &str = "Received an unexpected reply from the server. Please try again.";

/// Who authored a transcript turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnRole {
    User,
    Assistant,
    /// Session-level notices (errors, warm-up hints), not model output.
    System,
}

/// One turn in a chat transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatTurn {
    /// Stable render key (UUID string).
    pub id: String,
    pub role: TurnRole,
    pub text: String,
}

impl ChatTurn {
    fn new(role: TurnRole, text: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            text,
        }
    }
}

/// Turn-based transcript plus the single-request guard.
#[derive(Clone, Debug, Default)]
pub struct ChatSession {
    /// Append-only; never reordered or deduplicated.
    pub turns: Vec<ChatTurn>,
    /// True while a request is in flight. Submissions during this are dropped.
    pub pending: bool,
    pub last_error: Option<String>,
    /// Outcome of the mount-time health probe, if it has run.
    pub backend_ready: Option<bool>,
}

impl ChatSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Session whose transcript starts with an assistant greeting.
    #[must_use]
    pub fn with_greeting(text: &str) -> Self {
        Self {
            turns: vec![ChatTurn::new(TurnRole::Assistant, text.to_owned())],
            ..Self::default()
        }
    }

    /// Accept a user submission, returning the outbound message text.
    ///
    /// The transcript keeps the input as typed; trimming is only the
    /// emptiness guard and the outbound payload. Returns `None` without
    /// touching the transcript when the trimmed input is empty or another
    /// request is already pending; pending submissions are dropped, not
    /// queued.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() || self.pending {
            return None;
        }
        self.turns.push(ChatTurn::new(TurnRole::User, input.to_owned()));
        self.pending = true;
        self.last_error = None;
        Some(text.to_owned())
    }

    /// Record a successful assistant reply for the in-flight request.
    pub fn receive_reply(&mut self, text: String) {
        self.turns.push(ChatTurn::new(TurnRole::Assistant, text));
        self.pending = false;
        self.last_error = None;
    }

    /// Record a failed request as a system turn.
    pub fn receive_failure(&mut self, message: String) {
        self.turns.push(ChatTurn::new(TurnRole::System, message.clone()));
        self.pending = false;
        self.last_error = Some(message);
    }

    /// Store the mount-time health-probe outcome.
    pub fn record_health(&mut self, ok: bool) {
        self.backend_ready = Some(ok);
    }
}

/// Extract the assistant text from a reply body.
///
/// The backend has answered with both `{"message": ...}` and
/// `{"response": ...}` shapes; either string field is accepted.
#[must_use]
pub fn reply_text(body: &Value) -> Option<String> {
    body.get("message")
        .or_else(|| body.get("response"))
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Map a finished tutor call onto the session.
pub fn resolve_tutor_outcome(session: &mut ChatSession, outcome: Result<Value, ApiError>) {
    match outcome {
        Ok(body) => match reply_text(&body) {
            Some(text) => session.receive_reply(text),
            None => session.receive_failure(TUTOR_INVALID_REPLY_MESSAGE.to_owned()),
        },
        Err(err) if err.is_warmup() => session.receive_failure(TUTOR_WARMUP_MESSAGE.to_owned()),
        Err(_) => session.receive_failure(TUTOR_UNREACHABLE_MESSAGE.to_owned()),
    }
}

/// Map a finished support-chat call onto the session.
///
/// Failures surface the HTTP layer's own message (warm-up constant, status
/// text, or transport description) instead of tutor-specific wording.
pub fn resolve_chat_outcome(session: &mut ChatSession, outcome: Result<Value, ApiError>) {
    match outcome {
        Ok(body) => match reply_text(&body) {
            Some(text) => session.receive_reply(text),
            None => session.receive_failure(CHAT_INVALID_REPLY_MESSAGE.to_owned()),
        },
        Err(err) => session.receive_failure(err.to_string()),
    }
}

/// Flatten a history response into display lines.
///
/// The history shape is not pinned down upstream; arrays of strings and
/// arrays of objects with any of the usual text fields are both accepted.
/// Anything unrecognized yields an empty list rather than an error.
#[must_use]
pub fn history_lines(body: &Value) -> Vec<String> {
    let items = match body {
        Value::Array(items) => items.as_slice(),
        Value::Object(_) => match body.get("history").or_else(|| body.get("messages")) {
            Some(Value::Array(items)) => items.as_slice(),
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::String(line) => Some(line.clone()),
            Value::Object(_) => ["message", "response", "text", "content"]
                .iter()
                .find_map(|key| item.get(key).and_then(Value::as_str))
                .map(str::to_owned),
            _ => None,
        })
        .collect()
}
