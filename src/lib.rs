//! Taskdeck: single-user task tracking core.
//!
//! This crate holds the state and derived-view logic behind a personal task
//! dashboard. A presentation layer renders the snapshots it exposes and
//! forwards user intents back into it; nothing here draws anything.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (storage, logging, etc.)
//!
//! # Modules
//!
//! - [`storage`]: The local key-value persistence slot
//! - [`notification`]: User-visible toast notifications
//! - [`task`]: Task collection, validation, and derived dashboard views
//! - [`session`]: Login state, route guard, and route resumption
//! - [`config`]: Admin credential and data directory configuration
//! - [`app`]: The application state container handed to the view layer

pub mod app;
pub mod config;
pub mod notification;
pub mod session;
pub mod storage;
pub mod task;

#[cfg(test)]
mod test_support;
