//! Error types for `is_it_friday`.
//!
//! [`InquiryError`] covers misuse of an [`crate::inquiry::Inquiry`] and answer
//! mismatches, while [`FridayError`] wraps everything the binary can report.
use std::io;
use std::sync::Arc;

use thiserror::Error;

/// Failures raised while asking about or confirming an answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InquiryError {
    /// `ask` ran before any day was recorded.
    #[error("today has not been set; record a day before asking")]
    TodayUnset,
    /// `confirm` ran before any answer was recorded.
    #[error("no answer recorded; ask whether it's Friday first")]
    NotAsked,
    /// The recorded answer differs from the expected text.
    #[error("expected answer \"{expected}\" but was told \"{actual}\"")]
    AnswerMismatch {
        /// Answer the caller expected.
        expected: String,
        /// Answer actually recorded.
        actual: String,
    },
}

/// Errors surfaced by the `is-it-friday` command.
#[derive(Debug, Error)]
pub enum FridayError {
    /// Wraps configuration loading failures from `ortho_config`.
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The inquiry failed, usually because the answer did not match.
    #[error(transparent)]
    Inquiry(#[from] InquiryError),
    /// Writing the answer failed.
    #[error("failed to write answer: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias for results returned by the command.
pub type Result<T, E = FridayError> = std::result::Result<T, E>;
