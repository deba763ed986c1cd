//! Step definitions shared by the dashboard and session scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
