//! Transient status messages
//!
//! A status replaces the old "draw, then sleep" pattern: it carries a
//! wall-clock deadline and the main loop drops it once the deadline passes.

use std::time::{Duration, Instant};

/// What a status message reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// A blocking action is about to run
    Processing,
    Success,
    Error,
    /// Result of a status query
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientStatus {
    kind: StatusKind,
    text: String,
    expires_at: Option<Instant>,
}

impl TransientStatus {
    /// Shown until replaced; no deadline.
    pub fn processing(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Processing,
            text: text.into(),
            expires_at: None,
        }
    }

    pub fn success(text: impl Into<String>, now: Instant, dwell: Duration) -> Self {
        Self::timed(StatusKind::Success, text, now, dwell)
    }

    pub fn error(text: impl Into<String>, now: Instant, dwell: Duration) -> Self {
        Self::timed(StatusKind::Error, text, now, dwell)
    }

    pub fn info(text: impl Into<String>, now: Instant, dwell: Duration) -> Self {
        Self::timed(StatusKind::Info, text, now, dwell)
    }

    fn timed(kind: StatusKind, text: impl Into<String>, now: Instant, dwell: Duration) -> Self {
        Self {
            kind,
            text: text.into(),
            expires_at: Some(now + dwell),
        }
    }

    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now >= deadline)
    }
}
