
use super::types::{EdgePath, RouteResult};
use super::{RoutingOutput, route_all_edges};
use crate::graph::Edge;
use crate::layout::{LayoutNode, NODE_HEIGHT, NODE_WIDTH};
use crate::theme::palette_color;

/// Helper to build positioned nodes from `(id, x, y)`; colors follow input order.
fn nodes(specs: &[(&str, f64, f64)]) -> Vec<LayoutNode> {
    specs
        .iter()
        .enumerate()
        .map(|(i, &(id, x, y))| LayoutNode {
            id: id.to_string(),
            label: id.to_string(),
            x,
            y,
            width: NODE_WIDTH,
            height: NODE_HEIGHT,
            color: palette_color(i),
        })
        .collect()
}

/// Helper to create an Edge.
fn edge(source: &str, target: &str) -> Edge {
    Edge::new(source, target)
}

/// Route and return the output.
fn route(nodes: &[LayoutNode], edges: &[Edge]) -> RoutingOutput {
    route_all_edges(nodes, edges)
}

/// Assert that a routing output has all edges routed.
fn assert_all_routed(output: &RoutingOutput) {
    for (edge, result) in &output.results {
        if let RouteResult::Unresolved { warning } = result {
            panic!(
                "Edge {} -> {} failed: {}",
                edge.source, edge.target, warning
            );
        }
    }
}

/// Get the path for a specific edge index from routing output.
fn get_path(output: &RoutingOutput, idx: usize) -> &EdgePath {
    match &output.results[idx].1 {
        RouteResult::Routed(path) => path,
        RouteResult::Unresolved { warning } => {
            panic!("Edge {} failed: {}", idx, warning);
        }
    }
}
