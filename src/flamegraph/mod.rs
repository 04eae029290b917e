//! Flamegraph generation using the inferno library.
//!
//! This module converts a profile's stacks into an interactive SVG
//! flamegraph weighted by slot 0.

pub mod generator;

// Re-export main types
pub use generator::{default_count_name, generate_flamegraph, FlamegraphConfig};
