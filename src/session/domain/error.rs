//! Error types for login form validation.

use thiserror::Error;

/// Errors returned while validating login form input.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SessionDomainError {
    /// The email field is empty.
    #[error("Email is required")]
    EmailRequired,

    /// The email field is not a plausible address.
    #[error("Invalid email")]
    InvalidEmail,

    /// The password field is empty.
    #[error("Password is required")]
    PasswordRequired,
}
