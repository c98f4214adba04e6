//! CLI command implementations.

pub mod config;
pub mod sequence;
pub mod version;
