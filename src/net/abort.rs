//! Abort plumbing that ties an in-flight fetch to a timeout.
//!
//! TRADE-OFFS
//! ==========
//! `AbortController` construction can fail on very old browsers. The guard
//! then degrades to a plain fetch with no timeout rather than refusing to
//! send at all.

use gloo_timers::callback::Timeout;
use web_sys::{AbortController, AbortSignal};

/// Arms an abort timer for one request.
///
/// Dropping the guard cancels the timer, so a response that arrives in time
/// never sees a spurious abort.
pub struct RequestGuard {
    controller: Option<AbortController>,
    _timeout: Option<Timeout>,
}

impl RequestGuard {
    /// Guard that aborts the associated request after `timeout_ms`.
    #[must_use]
    pub fn with_timeout(timeout_ms: u32) -> Self {
        let controller = AbortController::new().ok();
        let timeout = controller
            .clone()
            .map(|ctrl| Timeout::new(timeout_ms, move || ctrl.abort()));
        Self {
            controller,
            _timeout: timeout,
        }
    }

    /// Signal to attach to the outgoing request.
    #[must_use]
    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }
}
