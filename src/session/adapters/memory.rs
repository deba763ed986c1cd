//! In-memory navigator.

use std::sync::{Arc, PoisonError, RwLock};

use crate::session::{domain::Route, ports::Navigator};

/// Thread-safe navigator holding a location history.
///
/// Clones share the same history.
#[derive(Debug, Clone)]
pub struct InMemoryNavigator {
    history: Arc<RwLock<Vec<Route>>>,
}

impl InMemoryNavigator {
    /// Creates a navigator whose current location is `path`.
    #[must_use]
    pub fn starting_at(path: impl Into<String>) -> Self {
        Self {
            history: Arc::new(RwLock::new(vec![Route::new(path)])),
        }
    }

    /// Returns every location visited, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<Route> {
        self.history
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for InMemoryNavigator {
    fn default() -> Self {
        Self::starting_at(Route::DASHBOARD_PATH)
    }
}

impl Navigator for InMemoryNavigator {
    fn current(&self) -> Route {
        self.history
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
            .unwrap_or_else(Route::dashboard)
    }

    fn navigate(&self, route: &Route) {
        self.history
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route.clone());
    }
}
