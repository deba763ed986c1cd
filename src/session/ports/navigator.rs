//! Navigation port.

use crate::session::domain::Route;
use std::sync::Arc;

/// The view layer's router as seen from the core.
pub trait Navigator: Send + Sync {
    /// Returns the current location.
    fn current(&self) -> Route;

    /// Moves to `route`.
    fn navigate(&self, route: &Route);
}

impl<N: Navigator + ?Sized> Navigator for Arc<N> {
    fn current(&self) -> Route {
        (**self).current()
    }

    fn navigate(&self, route: &Route) {
        (**self).navigate(route);
    }
}
