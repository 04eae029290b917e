//! Caller → callee graph built from sample stacks.
//!
//! Every frame occurrence credits its node with the sample's values, so a
//! function appearing at two depths of one stack is counted twice. Edges
//! run from a frame to the next frame in the stack slice. Samples whose
//! innermost frame is unresolved are left out entirely.

use super::samples::accumulate;
use crate::profile::{innermost_location, location_key, Sample};
use log::debug;
use std::collections::HashMap;

/// Totals for one location in the call graph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphNode {
    /// Sum over every stack occurrence of this location
    pub values: Vec<i64>,

    /// Next-frame location → values observed on that transition
    pub children: HashMap<String, Vec<i64>>,
}

impl GraphNode {
    fn new(width: usize) -> Self {
        Self {
            values: vec![0; width],
            children: HashMap::new(),
        }
    }
}

/// Call graph keyed by location
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallGraph {
    pub nodes: HashMap<String, GraphNode>,
}

impl CallGraph {
    /// Walk every sample's stack and accumulate node and edge totals
    pub fn build(samples: &[Sample]) -> Self {
        let mut nodes: HashMap<String, GraphNode> = HashMap::new();
        let mut edges = 0usize;

        for sample in samples {
            if innermost_location(sample).is_none() {
                continue;
            }
            let width = sample.values.len();

            for (i, frame) in sample.frames.iter().enumerate() {
                let Some(caller) = location_key(frame) else {
                    continue;
                };

                let node = nodes
                    .entry(caller)
                    .or_insert_with(|| GraphNode::new(width));
                accumulate(&mut node.values, &sample.values);

                let Some(callee) = sample.frames.get(i + 1).and_then(location_key) else {
                    continue;
                };

                let edge = node.children.entry(callee).or_insert_with(|| {
                    edges += 1;
                    vec![0; width]
                });
                accumulate(edge, &sample.values);
            }
        }

        debug!("Built call graph with {} nodes and {} edges", nodes.len(), edges);

        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, key: &str) -> Option<&GraphNode> {
        self.nodes.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Frame;

    #[test]
    fn test_build_two_frame_stack() {
        let stack = vec![Frame::new("A", 1), Frame::new("B", 2)];
        let samples = vec![
            Sample::new(stack.clone(), vec![10]),
            Sample::new(stack, vec![5]),
        ];
        let graph = CallGraph::build(&samples);

        let a = graph.node("A:1").unwrap();
        assert_eq!(a.values, vec![15]);
        assert_eq!(a.children["B:2"], vec![15]);

        let b = graph.node("B:2").unwrap();
        assert_eq!(b.values, vec![15]);
        assert!(b.children.is_empty());
    }

    #[test]
    fn test_recursion_counts_each_occurrence() {
        let samples = vec![Sample::new(
            vec![Frame::new("fib", 3), Frame::new("fib", 3), Frame::new("main", 1)],
            vec![4],
        )];
        let graph = CallGraph::build(&samples);

        let fib = graph.node("fib:3").unwrap();
        assert_eq!(fib.values, vec![8]);
        assert_eq!(fib.children["fib:3"], vec![4]);
        assert_eq!(fib.children["main:1"], vec![4]);
    }

    #[test]
    fn test_unresolved_frames_break_edges() {
        let samples = vec![Sample::new(
            vec![Frame::new("a", 1), Frame::unresolved(), Frame::new("c", 3)],
            vec![1],
        )];
        let graph = CallGraph::build(&samples);

        assert_eq!(graph.len(), 2);
        assert!(graph.node("a:1").unwrap().children.is_empty());
        assert!(graph.node("c:3").unwrap().children.is_empty());
    }

    #[test]
    fn test_unresolved_innermost_frame_drops_sample() {
        let samples = vec![Sample::new(
            vec![Frame::unresolved(), Frame::new("main", 1)],
            vec![7],
        )];
        assert!(CallGraph::build(&samples).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(CallGraph::build(&[]).is_empty());
    }
}
