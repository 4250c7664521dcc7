use std::collections::BTreeMap;

use super::LayoutConfig;
use crate::geometry::Point;
use crate::graph::Graph;

/// Layered positions for every node, in node sequence order.
///
/// Nodes are grouped by depth. Each layer keeps input order left to right,
/// one `horizontal_spacing` slot per node, with the row of slots centered on
/// x = 0. Layer `d` sits at `y = d * vertical_spacing`.
pub fn layered_positions(graph: &Graph, config: &LayoutConfig) -> Vec<Point> {
    let depths = graph.depths();

    // depth -> node sequence indices, in input order
    let mut layers: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (i, node) in graph.nodes().iter().enumerate() {
        let depth = depths.get(&node.id).copied().unwrap_or(0);
        layers.entry(depth).or_default().push(i);
    }

    let mut positions = vec![Point::default(); graph.len()];
    for (depth, members) in &layers {
        let y = *depth as f64 * config.vertical_spacing;
        let start = layer_start_x(members.len(), config.horizontal_spacing);
        for (slot, &i) in members.iter().enumerate() {
            positions[i] = Point::new(start + slot as f64 * config.horizontal_spacing, y);
        }
        tracing::trace!(depth, width = members.len(), "placed layer");
    }
    positions
}

/// X of the first slot in a layer of `count` nodes.
fn layer_start_x(count: usize, spacing: f64) -> f64 {
    let layer_width = count as f64 * spacing;
    -layer_width / 2.0 + spacing / 2.0
}
