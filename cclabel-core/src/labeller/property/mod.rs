//! Property-based tests for the three-pass labeller.
//!
//! Random masks of varied density are labelled and checked against a
//! flood-fill oracle, the dense-range and background invariants, determinism,
//! and stability when the output's own foreground is labelled again.

mod properties;
mod strategies;
mod tests;
