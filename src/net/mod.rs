//! Networking layer for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns request construction and error classification; `abort` ties
//! in-flight fetches to timeout signals in the browser.

pub mod api;

#[cfg(feature = "csr")]
pub mod abort;
