//! Error types for task validation and parsing.

use thiserror::Error;

/// Errors returned while validating task input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("Title is required")]
    TitleRequired,

    /// The title is shorter than the minimum length.
    #[error("Title must be at least {min} characters")]
    TitleTooShort {
        /// Minimum number of characters.
        min: usize,
    },

    /// The priority is not one of the known levels.
    #[error(transparent)]
    InvalidPriority(#[from] ParsePriorityError),

    /// The due date could not be parsed as a calendar date.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),
}

/// Error returned while parsing a priority level.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority '{0}', expected high, medium, or low")]
pub struct ParsePriorityError(pub String);
