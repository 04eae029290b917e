//! Build collapsed stack format from profile samples.
//!
//! Collapsed stacks are the input format for flamegraph generation.
//! Format: "outer;middle;inner weight"
//!
//! Example: "main.main:10;main.work:42;runtime.mallocgc:1000 4096"
//! This means: main called work which called mallocgc, weighing 4096
//! (slot 0 of the samples on that stack).

use crate::profile::{location_key, Sample};
use log::debug;
use std::collections::HashMap;

/// Frame label used when a frame has no location key
pub const UNKNOWN_FRAME: &str = "[unknown]";

/// A single collapsed stack entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapsedStack {
    /// Stack trace as semicolon-separated string, outermost first
    pub stack: String,

    /// Summed slot-0 value of every sample with this stack
    pub weight: u64,
}

impl CollapsedStack {
    pub fn new(stack: String, weight: u64) -> Self {
        Self { stack, weight }
    }

    /// Line in the folded format consumed by flamegraph tools
    pub fn to_line(&self) -> String {
        format!("{} {}", self.stack, self.weight)
    }
}

/// Build collapsed stacks from samples
///
/// Samples without frames or with a non-positive slot 0 carry no weight
/// and are skipped. Identical stacks are merged. The result is sorted by
/// stack string.
pub fn build_collapsed_stacks(samples: &[Sample]) -> Vec<CollapsedStack> {
    let mut stack_map: HashMap<String, u64> = HashMap::new();

    for sample in samples {
        let weight = match sample.values.first() {
            Some(&value) if value > 0 => value as u64,
            _ => continue,
        };
        if sample.frames.is_empty() {
            continue;
        }

        let stack = sample
            .frames
            .iter()
            .rev()
            .map(|frame| location_key(frame).unwrap_or_else(|| UNKNOWN_FRAME.to_string()))
            .collect::<Vec<_>>()
            .join(";");

        let total = stack_map.entry(stack).or_insert(0);
        *total = total.saturating_add(weight);
    }

    let mut stacks: Vec<CollapsedStack> = stack_map
        .into_iter()
        .map(|(stack, weight)| CollapsedStack::new(stack, weight))
        .collect();
    stacks.sort_by(|a, b| a.stack.cmp(&b.stack));

    debug!("Built {} unique collapsed stacks", stacks.len());

    stacks
}
