//! Aggregation of profile samples.
//!
//! This module reduces sample stacks into:
//! - Per-location value totals (flat, cumulative and inclusive views)
//! - A caller → callee graph (graph view)
//! - Collapsed stack format (for flamegraph generation)

pub mod call_graph;
pub mod samples;
pub mod stack_builder;

// Re-export main types and functions
pub use call_graph::{CallGraph, GraphNode};
pub use samples::{accumulate, aggregate, aggregate_inclusive, Aggregated};
pub use stack_builder::{build_collapsed_stacks, CollapsedStack};
