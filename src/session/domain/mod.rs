//! Domain model for sessions and routing.

mod credentials;
mod error;
mod route;
mod state;
mod token;

pub use credentials::{AdminCredentials, LoginForm};
pub use error::SessionDomainError;
pub use route::{Route, RouteDecision, View, evaluate_route};
pub use state::SessionState;
pub use token::SessionToken;
