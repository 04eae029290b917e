//! pprof-agent
//!
//! Aggregates sampled runtime profiles (heap, goroutine, threadcreate,
//! block, allocs, cpu) into flat, cumulative and call-graph text reports.
//!
//! This crate provides the core implementation for the
//! `pprof-agent` CLI tool and its tool-call surface.
//!
//! ## Getting Started
//!
//! ```bash
//! pprof-agent render heap --snapshots ./profiles --view graph
//! pprof-agent call heap-profile --url http://localhost:6060/debug/pprof --args '{"limit": 200}'
//! ```

pub mod aggregator;
pub mod commands;
pub mod dispatch;
pub mod flamegraph;
pub mod format;
pub mod output;
pub mod profile;
pub mod sampler;
pub mod tools;
pub mod utils;
pub mod views;
