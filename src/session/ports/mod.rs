//! Port contracts for session routing.

pub mod navigator;

pub use navigator::Navigator;
