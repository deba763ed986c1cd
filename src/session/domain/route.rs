//! Routes, views, and the route guard.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SessionState;

/// A location path such as `/` or `/login`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(String);

impl Route {
    /// Path of the login view.
    pub const LOGIN_PATH: &'static str = "/login";
    /// Path of the dashboard, the default protected route.
    pub const DASHBOARD_PATH: &'static str = "/";

    /// Creates a route, normalizing to a single leading slash.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        let raw = path.into();
        let trimmed = raw.trim();
        if trimmed.starts_with('/') {
            Self(trimmed.to_owned())
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    /// Returns the login route.
    #[must_use]
    pub fn login() -> Self {
        Self(Self::LOGIN_PATH.to_owned())
    }

    /// Returns the dashboard route.
    #[must_use]
    pub fn dashboard() -> Self {
        Self(Self::DASHBOARD_PATH.to_owned())
    }

    /// Returns the path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether this is the login route.
    #[must_use]
    pub fn is_login(&self) -> bool {
        self.0 == Self::LOGIN_PATH
    }

    /// Returns the view this path renders.
    #[must_use]
    pub fn view(&self) -> View {
        match self.0.as_str() {
            Self::LOGIN_PATH => View::Login,
            Self::DASHBOARD_PATH => View::Dashboard,
            _ => View::NotFound,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Credential entry.
    Login,
    /// Task dashboard; requires authentication.
    Dashboard,
    /// Any unknown path; reachable regardless of session.
    NotFound,
}

impl View {
    /// Returns whether the view requires an authenticated session.
    #[must_use]
    pub const fn is_protected(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

/// Outcome of evaluating a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Show the view for the requested route.
    Render(View),
    /// Go somewhere else instead.
    Redirect(Route),
}

/// Decides whether `route` may render for a session in `state`.
///
/// Protected views redirect anonymous sessions to the login view; the login
/// view redirects authenticated sessions to `resume`.
#[must_use]
pub fn evaluate_route(route: &Route, state: SessionState, resume: &Route) -> RouteDecision {
    let view = route.view();
    match (view, state.is_authenticated()) {
        (View::Login, true) => RouteDecision::Redirect(resume.clone()),
        (protected, false) if protected.is_protected() => RouteDecision::Redirect(Route::login()),
        (other, _) => RouteDecision::Render(other),
    }
}
