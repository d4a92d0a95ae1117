//! Non-fatal diagnostics (warnings, notices) from parsing and playback.
//!
//! Defaults-block errors are fatal and travel as `Err` values; everything
//! else — duplicate default letters, malformed notes under the best-effort
//! policy — is reported here so callers can log it however they like.

use serde::{Deserialize, Serialize};

/// One diagnostic, optionally tied to a 1-based note index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub level: FeedbackLevel,
    pub message: String,
    /// 1-based note index, or `None` for defaults-block diagnostics.
    pub index: Option<usize>,
}

impl Feedback {
    pub fn warning(message: impl Into<String>, index: Option<usize>) -> Self {
        Feedback {
            level: FeedbackLevel::Warning,
            message: message.into(),
            index,
        }
    }

    pub fn info(message: impl Into<String>, index: Option<usize>) -> Self {
        Feedback {
            level: FeedbackLevel::Info,
            message: message.into(),
            index,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackLevel {
    /// Parsed with assumptions, may not be what the author intended.
    Warning,
    /// Minor notice.
    Info,
}

/// Receives diagnostics as they happen.
///
/// The player reports skipped notes through this rather than logging
/// directly, so embedders choose the log format (or collect silently
/// with [`FeedbackCollector`]).
pub trait Diagnostics {
    fn report(&mut self, level: FeedbackLevel, index: usize, message: &str);
}

/// Collects diagnostics into a `Vec<Feedback>`.
#[derive(Debug, Default)]
pub struct FeedbackCollector {
    feedback: Vec<Feedback>,
}

impl FeedbackCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a warning not tied to a note.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.feedback.push(Feedback::warning(message, None));
    }

    /// Add a warning at a 1-based note index.
    pub fn warning_at(&mut self, index: usize, message: impl Into<String>) {
        self.feedback.push(Feedback::warning(message, Some(index)));
    }

    pub fn is_empty(&self) -> bool {
        self.feedback.is_empty()
    }

    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    pub fn into_feedback(self) -> Vec<Feedback> {
        self.feedback
    }
}

impl Diagnostics for FeedbackCollector {
    fn report(&mut self, level: FeedbackLevel, index: usize, message: &str) {
        self.feedback.push(Feedback {
            level,
            message: message.to_string(),
            index: Some(index),
        });
    }
}
