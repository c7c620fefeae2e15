//! Shared test utilities used across cclabel crates.

pub mod ci;
pub mod tracing;
