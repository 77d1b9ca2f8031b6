//! Error types for task draft validation and parsing.

use thiserror::Error;

/// Errors returned by the validation gate when a draft cannot be committed.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DraftValidationError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,
}

/// Error returned while parsing task statuses from boundary input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing tag names outside the fixed vocabulary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown tag: {0}")]
pub struct ParseTagError(pub String);
