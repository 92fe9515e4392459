//! CLI command implementations

pub mod stats;
pub mod traffic;
