//! Authentication state.

use serde::{Deserialize, Serialize};

/// Whether the current session has logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Only the login view is reachable.
    #[default]
    Anonymous,
    /// Protected views are reachable.
    Authenticated,
}

impl SessionState {
    /// Returns whether the session is authenticated.
    #[must_use]
    pub const fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}
