//! Call graph report.

use super::top::select_top;
use crate::aggregator::{CallGraph, GraphNode};
use crate::format::format_values;
use crate::profile::{Profile, ProfileKind};

/// Top `n` nodes of the call graph, each followed by its callees
pub fn graph_view(profile: &Profile, n: usize, kind: ProfileKind) -> String {
    let graph = CallGraph::build(&profile.samples);
    format_graph(&graph, n, kind)
}

/// Render a call graph already built from samples
pub fn format_graph(graph: &CallGraph, n: usize, kind: ProfileKind) -> String {
    let nodes: Vec<(&String, &GraphNode)> = graph.nodes.iter().collect();
    let top = select_top(nodes, n, |(name, node)| (name.as_str(), node.values.as_slice()));

    let mut result = String::new();
    result.push_str(&format!("Call graph view (top {} nodes)\n", n));
    result.push_str("Each node is followed by its children.\n\n");

    for (name, node) in top {
        result.push_str(&format!("Node: {}\n", name));
        result.push_str(&format!("Values: {}\n", format_values(&node.values, kind)));

        if !node.children.is_empty() {
            result.push_str("Children:\n");
            let children: Vec<(&String, &Vec<i64>)> = node.children.iter().collect();
            let count = children.len();
            let children = select_top(children, count, |(child, values)| {
                (child.as_str(), values.as_slice())
            });
            for (child, values) in children {
                result.push_str(&format!("  {}: {}\n", child, format_values(values, kind)));
            }
        }
        result.push('\n');
    }

    result
}
