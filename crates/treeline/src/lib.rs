//! Layout and connector routing for tree and DAG diagrams stored as flat
//! line records (`id,label,child1;child2,x;y`).
//!
//! The pipeline is `parse` → `layout` → `route`, with `serialize` writing the
//! current positions back out and `snap` adjusting interactive moves. Every
//! step is a pure function over an explicit snapshot; none touches the
//! filesystem.

pub mod geometry;
pub mod graph;
pub mod layout;
pub mod record;
pub mod routing;
pub mod snap;
pub mod theme;

use geometry::Point;
use graph::{Edge, Graph};
use layout::{Layout, LayoutConfig, LayoutNode};
use routing::types::RoutingOutput;
use snap::SnapOutcome;

/// Parse record text into a graph. Malformed lines are skipped.
pub fn parse(text: &str) -> Graph {
    record::parse(text)
}

/// Position every node of `graph`.
pub fn layout(graph: &Graph, config: &LayoutConfig) -> Layout {
    layout::layout(graph, config)
}

/// Route every edge between the given node boxes.
pub fn route(nodes: &[LayoutNode], edges: &[Edge]) -> RoutingOutput {
    routing::route_all_edges(nodes, edges)
}

/// Write the current nodes and edges back out as record text.
pub fn serialize(nodes: &[LayoutNode], edges: &[Edge]) -> String {
    record::serialize(nodes, edges)
}

/// Adjust a proposed position for a moving node.
pub fn snap(moving_id: &str, candidate: Point, nodes: &[LayoutNode], threshold: f64) -> Point {
    snap::snap(moving_id, candidate, nodes, threshold)
}

/// A parsed, laid out and routed diagram.
#[derive(Debug, Clone)]
pub struct Diagram {
    pub graph: Graph,
    pub layout: Layout,
    pub routing: RoutingOutput,
}

impl Diagram {
    /// Run the whole pipeline over `text`.
    ///
    /// Returns `None` when no record could be parsed; the caller should leave
    /// whatever it currently shows untouched.
    pub fn from_text(text: &str, config: &LayoutConfig) -> Option<Self> {
        let graph = parse(text);
        if graph.is_empty() {
            tracing::debug!("no usable records");
            return None;
        }
        Some(Self::from_graph(graph, config))
    }

    pub fn from_graph(graph: Graph, config: &LayoutConfig) -> Self {
        let layout = layout(&graph, config);
        let routing = route(&layout.nodes, &layout.edges);
        Self {
            graph,
            layout,
            routing,
        }
    }

    /// Move a node, snapping it against the others, and re-route.
    ///
    /// Returns `None` if no node has `id`.
    pub fn move_node(&mut self, id: &str, candidate: Point, threshold: f64) -> Option<SnapOutcome> {
        let outcome = snap::snap_with_anchors(id, candidate, &self.layout.nodes, threshold);
        let node = self.layout.node_mut(id)?;
        node.x = outcome.position.x;
        node.y = outcome.position.y;
        self.reroute();
        Some(outcome)
    }

    /// Rebuild the routing plan from the current node positions.
    pub fn reroute(&mut self) {
        self.routing = route(&self.layout.nodes, &self.layout.edges);
    }

    /// Record text with every position pinned.
    pub fn to_text(&self) -> String {
        serialize(&self.layout.nodes, &self.layout.edges)
    }
}
