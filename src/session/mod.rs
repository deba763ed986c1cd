//! Session state and route guarding for Taskdeck.
//!
//! A session is either anonymous or authenticated against a single configured
//! admin credential. The guard decides, on every navigation attempt, whether
//! a route may render or must redirect, and remembers the last protected
//! route so a returning session resumes where it left off. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
