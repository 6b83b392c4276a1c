//! Shared error types for the services crate.

use thiserror::Error;

/// Misuse of a quiz session. Positions are 0-based; messages show them 1-based.
///
/// A rejected call never changes session state, so callers can report these
/// and carry on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("question {} has already been answered", .position + 1)]
    AlreadyAnswered { position: usize },
    #[error("question {} has not been answered yet", .position + 1)]
    Unanswered { position: usize },
    #[error("session already finished")]
    Finished,
}
