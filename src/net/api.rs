//! REST API client for the learning-platform backend.
//!
//! Browser (csr): real HTTP calls via `gloo-net`, each armed with an
//! abort-backed timeout. Native (tests): stubs returning transport errors
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so backend failures
//! degrade to rendered messages. Success bodies come back as raw
//! `serde_json::Value`; interpreting their shape belongs to the session
//! layer, not here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

#[cfg(feature = "csr")]
use super::abort::RequestGuard;

/// Fixed notice for backend cold starts (HTTP 503/504).
pub const WARMUP_MESSAGE: &str = "Server is warming up, please try again in a moment.";

/// Placeholder identity sent to the tutor endpoint; real accounts are out of scope.
pub const TUTOR_USER_ID: &str = "test-user";

/// Per-request timeout before the in-flight call is aborted.
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;

/// Errors surfaced by backend calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No API base URL is available in this environment.
    #[error("API base URL is not configured")]
    Config,
    /// Backend cold start (HTTP 503/504); retrying shortly usually succeeds.
    #[error("{}", WARMUP_MESSAGE)]
    WarmingUp,
    /// Completed response with a non-success status outside the warm-up pair.
    #[error("API call failed: {status_text}")]
    Status {
        status: u16,
        status_text: String,
        /// Raw response body text, kept for diagnostics when available.
        body: Option<String>,
    },
    /// The request produced no HTTP response (network failure or abort).
    #[error("request failed: {0}")]
    Transport(String),
}

impl ApiError {
    /// True for the transient cold-start condition.
    #[must_use]
    pub fn is_warmup(&self) -> bool {
        matches!(self, Self::WarmingUp)
    }
}

/// Explicit client configuration; nothing here reads ambient environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme + authority that `/api/...` paths resolve against.
    pub base_url: String,
    pub timeout_ms: u32,
}

impl ApiConfig {
    /// Config pointing at an explicit base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Resolve the base from the host document: a `data-api-base` attribute
    /// on the root element wins, falling back to the window origin. Outside
    /// the browser the base stays empty and every call fails fast with
    /// [`ApiError::Config`].
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "csr")]
        {
            Self::new(document_base_url())
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::new(String::new())
        }
    }
}

#[cfg(feature = "csr")]
fn document_base_url() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    if let Some(el) = window.document().and_then(|d| d.document_element()) {
        if let Some(base) = el.get_attribute("data-api-base") {
            let base = base.trim();
            if !base.is_empty() {
                return base.to_owned();
            }
        }
    }
    window.location().origin().unwrap_or_default()
}

/// Resolve a request path against the configured base URL.
///
/// # Errors
///
/// Returns [`ApiError::Config`] when no base URL is set, so misconfiguration
/// fails before any network traffic.
#[cfg(any(test, feature = "csr"))]
fn endpoint_url(base_url: &str, path: &str) -> Result<String, ApiError> {
    let base = base_url.trim_end_matches('/');
    if base.is_empty() {
        return Err(ApiError::Config);
    }
    Ok(format!("{base}{path}"))
}

#[cfg(any(test, feature = "csr"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Error for a completed response with a non-success status.
#[cfg(any(test, feature = "csr"))]
fn status_failure(status: u16, status_text: &str, body: Option<String>) -> ApiError {
    match status {
        503 | 504 => ApiError::WarmingUp,
        _ => ApiError::Status {
            status,
            status_text: status_text.to_owned(),
            body,
        },
    }
}

#[cfg(any(test, feature = "csr"))]
fn chat_payload(message: &str) -> Value {
    serde_json::json!({ "message": message })
}

#[cfg(any(test, feature = "csr"))]
fn tutor_payload(message: &str) -> Value {
    serde_json::json!({ "message": message, "user_id": TUTOR_USER_ID })
}

/// Thin client over the backend's REST surface, shared via Leptos context.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Send a support-chat message via `POST /api/chat`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for configuration, transport, timeout, or
    /// non-success status outcomes.
    pub async fn send_chat_message(&self, message: &str) -> Result<Value, ApiError> {
        #[cfg(feature = "csr")]
        {
            self.post_json("/api/chat", &chat_payload(message), false).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = message;
            Err(not_in_browser())
        }
    }

    /// Send a tutor message via `POST /api/tutor/chat`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for configuration, transport, timeout, or
    /// non-success status outcomes.
    pub async fn send_tutor_message(&self, message: &str) -> Result<Value, ApiError> {
        #[cfg(feature = "csr")]
        {
            self.post_json("/api/tutor/chat", &tutor_payload(message), true).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = message;
            Err(not_in_browser())
        }
    }

    /// Fetch prior conversation turns via `GET /api/chat/history`.
    ///
    /// Only ever called on explicit user request, never automatically.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for configuration, transport, timeout, or
    /// non-success status outcomes.
    pub async fn fetch_chat_history(&self) -> Result<Value, ApiError> {
        #[cfg(feature = "csr")]
        {
            self.get_json("/api/chat/history").await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(not_in_browser())
        }
    }

    /// Probe `GET /api/health`, reporting whether the backend answered with
    /// a success status. Only the status code is inspected.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when no HTTP response arrives at all.
    pub async fn check_health(&self) -> Result<bool, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = endpoint_url(&self.config.base_url, "/api/health")?;
            let guard = RequestGuard::with_timeout(self.config.timeout_ms);
            let signal = guard.signal();
            let resp = gloo_net::http::Request::get(&url)
                .abort_signal(signal.as_ref())
                .header("Content-Type", "application/json")
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(is_success(resp.status()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(not_in_browser())
        }
    }

    #[cfg(feature = "csr")]
    async fn post_json(&self, path: &str, payload: &Value, accept_json: bool) -> Result<Value, ApiError> {
        let url = endpoint_url(&self.config.base_url, path)?;
        log::debug!("POST {url}");
        let guard = RequestGuard::with_timeout(self.config.timeout_ms);
        let signal = guard.signal();
        let mut builder = gloo_net::http::Request::post(&url).abort_signal(signal.as_ref());
        if accept_json {
            builder = builder.header("Accept", "application/json");
        }
        let resp = builder
            .json(payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json_response(resp).await
    }

    #[cfg(feature = "csr")]
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = endpoint_url(&self.config.base_url, path)?;
        log::debug!("GET {url}");
        let guard = RequestGuard::with_timeout(self.config.timeout_ms);
        let signal = guard.signal();
        let resp = gloo_net::http::Request::get(&url)
            .abort_signal(signal.as_ref())
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json_response(resp).await
    }
}

#[cfg(not(feature = "csr"))]
fn not_in_browser() -> ApiError {
    ApiError::Transport("not available outside the browser".to_owned())
}

#[cfg(feature = "csr")]
async fn read_json_response(resp: gloo_net::http::Response) -> Result<Value, ApiError> {
    let status = resp.status();
    if !is_success(status) {
        let status_text = resp.status_text();
        let body = resp.text().await.ok().filter(|text| !text.is_empty());
        log::warn!("api call failed: {status} {status_text}");
        return Err(status_failure(status, &status_text, body));
    }
    resp.json::<Value>()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}
