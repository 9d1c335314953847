//! CLI command implementations.

pub mod answers;
pub mod bootstrap;
pub mod config;
