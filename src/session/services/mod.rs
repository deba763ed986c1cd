//! Application services for session management.

mod guard;

pub use guard::{LoginOutcome, SessionError, SessionGuard, SessionResult};
