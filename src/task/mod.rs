//! Task collection management for Taskdeck.
//!
//! This module owns the user's task list: validating task input, assigning
//! identifiers and creation timestamps, persisting the whole collection to
//! the local persistence slot after every mutation, and computing the
//! pending/completed dashboard view for a search term. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
