//! Session guard: login, logout, restore, and route resumption.

use crate::notification::{Notification, Notifier};
use crate::session::{
    domain::{AdminCredentials, Route, RouteDecision, SessionState, SessionToken, evaluate_route},
    ports::Navigator,
};
use crate::storage::{KeyValueStore, StorageError, StorageKey};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The persistence slot rejected a token write or removal; the session
    /// state is unchanged.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Result of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials matched and the session is now authenticated.
    Authenticated,
    /// Credentials did not match; nothing changed.
    Rejected,
}

/// Holds authentication status and gates navigation.
pub struct SessionGuard<S, N>
where
    S: KeyValueStore,
    N: Navigator,
{
    store: Arc<S>,
    navigator: Arc<N>,
    notifier: Arc<dyn Notifier>,
    credentials: AdminCredentials,
    state: SessionState,
}

impl<S, N> SessionGuard<S, N>
where
    S: KeyValueStore,
    N: Navigator,
{
    /// Restores the session from the persistence slot and enforces the guard
    /// on the current location.
    ///
    /// With a stored token the session is authenticated and, only if the
    /// current location is the login view, navigates to the resume route.
    /// Without one, any location other than the login view is redirected to
    /// it.
    #[must_use]
    pub fn start(
        store: Arc<S>,
        navigator: Arc<N>,
        notifier: Arc<dyn Notifier>,
        credentials: AdminCredentials,
    ) -> Self {
        let token = store.get(StorageKey::Token).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "session token unreadable, starting anonymous");
            None
        });
        let state = if token.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        };
        let guard = Self {
            store,
            navigator,
            notifier,
            credentials,
            state,
        };

        let current = guard.navigator.current();
        match (state, current.is_login()) {
            (SessionState::Authenticated, true) => {
                let resume = guard.resume_route();
                guard.navigator.navigate(&resume);
            }
            (SessionState::Anonymous, false) => guard.navigator.navigate(&Route::login()),
            _ => {}
        }
        guard.record_location();
        guard
    }

    /// Returns the current session state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Returns whether the session is authenticated.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Returns the current location.
    #[must_use]
    pub fn current_route(&self) -> Route {
        self.navigator.current()
    }

    /// Checks credentials and, on a match, authenticates the session and
    /// navigates to the resume route.
    ///
    /// A mismatch emits an error notification and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the token cannot be persisted;
    /// the session stays anonymous.
    pub fn login(&mut self, email: &str, password: &str) -> SessionResult<LoginOutcome> {
        if !self.credentials.matches(email, password) {
            tracing::warn!(email, "login rejected");
            self.notifier
                .notify(Notification::error("Invalid email or password"));
            return Ok(LoginOutcome::Rejected);
        }

        let token = SessionToken::generate();
        self.store.set(StorageKey::Token, token.as_str())?;
        self.state = SessionState::Authenticated;
        tracing::info!(email, "login succeeded");
        self.notifier.notify(Notification::success("Login successful"));

        let resume = self.resume_route();
        self.navigator.navigate(&resume);
        self.record_location();
        Ok(LoginOutcome::Authenticated)
    }

    /// Clears the stored token, ends the session, and navigates to the login
    /// view.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the token cannot be removed;
    /// the session stays authenticated.
    pub fn logout(&mut self) -> SessionResult<()> {
        self.store.remove(StorageKey::Token)?;
        self.state = SessionState::Anonymous;
        tracing::info!("logged out");
        self.notifier
            .notify(Notification::info("Logged out successfully"));
        self.navigator.navigate(&Route::login());
        Ok(())
    }

    /// Evaluates the guard for `route` without navigating.
    #[must_use]
    pub fn decide(&self, route: &Route) -> RouteDecision {
        evaluate_route(route, self.state, &self.resume_route())
    }

    /// Attempts to navigate to `route`, following a redirect when the guard
    /// requires one, and records the final location.
    ///
    /// Returns the view that ends up rendered.
    #[must_use]
    pub fn navigate(&self, route: &Route) -> RouteDecision {
        let decision = self.decide(route);
        match &decision {
            RouteDecision::Render(_) => self.navigator.navigate(route),
            RouteDecision::Redirect(target) => self.navigator.navigate(target),
        }
        self.record_location();
        decision
    }

    /// Returns the last recorded protected route, or the dashboard when none
    /// is recorded.
    #[must_use]
    pub fn resume_route(&self) -> Route {
        match self.store.get(StorageKey::LastRoute) {
            Ok(Some(path)) => {
                let route = Route::new(path);
                if route.is_login() {
                    Route::dashboard()
                } else {
                    route
                }
            }
            Ok(None) => Route::dashboard(),
            Err(err) => {
                tracing::warn!(error = %err, "last route unreadable, resuming at dashboard");
                Route::dashboard()
            }
        }
    }

    /// Records the current location as the resume route when authenticated
    /// and away from the login view.
    pub fn record_location(&self) {
        if !self.is_authenticated() {
            return;
        }
        let current = self.navigator.current();
        if current.is_login() {
            return;
        }
        if let Err(err) = self.store.set(StorageKey::LastRoute, current.as_str()) {
            tracing::warn!(error = %err, route = %current, "could not record last route");
        }
    }
}
