//! Admin credential and login form input.

use serde::Deserialize;
use std::fmt;

use super::SessionDomainError;

/// The single email/password pair allowed to log in.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AdminCredentials {
    email: String,
    password: String,
}

impl AdminCredentials {
    /// Creates the credential pair.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns the admin email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns a copy with the email replaced.
    #[must_use]
    pub fn with_email(self, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..self
        }
    }

    /// Returns a copy with the password replaced.
    #[must_use]
    pub fn with_password(self, password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            ..self
        }
    }

    /// Returns whether the given pair matches exactly.
    #[must_use]
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Login form values as entered by the user.
#[derive(Clone, PartialEq, Eq, Default, Deserialize)]
pub struct LoginForm {
    /// Email text.
    pub email: String,
    /// Password text.
    pub password: String,
}

impl LoginForm {
    /// Creates form values.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks that both fields are filled and the email looks like an
    /// address.
    ///
    /// # Errors
    ///
    /// Returns the first failing field, email before password.
    pub fn validate(&self) -> Result<(), SessionDomainError> {
        if self.email.is_empty() {
            return Err(SessionDomainError::EmailRequired);
        }
        if !is_plausible_email(&self.email) {
            return Err(SessionDomainError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(SessionDomainError::PasswordRequired);
        }
        Ok(())
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn is_plausible_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}
