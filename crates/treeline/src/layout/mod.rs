pub mod auto;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};
use crate::graph::{Edge, Graph};
use crate::theme::{Color, palette_color};

pub const NODE_WIDTH: f64 = 150.0;
pub const NODE_HEIGHT: f64 = 50.0;
pub const HORIZONTAL_SPACING: f64 = 200.0;
pub const VERTICAL_SPACING: f64 = 120.0;

/// Box size and spacing constants for layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub node_width: f64,
    pub node_height: f64,
    /// Distance between neighbouring slots within a layer.
    pub horizontal_spacing: f64,
    /// Distance between consecutive layers.
    pub vertical_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: NODE_WIDTH,
            node_height: NODE_HEIGHT,
            horizontal_spacing: HORIZONTAL_SPACING,
            vertical_spacing: VERTICAL_SPACING,
        }
    }
}

/// How node positions were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Every record carried a position; they pass through unchanged.
    Explicit,
    /// Positions were derived from depth layers.
    Auto,
}

/// A positioned node box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    pub id: String,
    /// Raw label; see [`LayoutNode::display_label`] for what to draw.
    pub label: String,
    /// Top-left corner.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

impl LayoutNode {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// The label, or a `Node <id>` placeholder when it is empty.
    pub fn display_label(&self) -> Cow<'_, str> {
        if self.label.is_empty() {
            Cow::Owned(format!("Node {}", self.id))
        } else {
            Cow::Borrowed(&self.label)
        }
    }
}

/// Positioned nodes and the edges between them, ready for routing.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub mode: LayoutMode,
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<Edge>,
}

impl Layout {
    /// Bounding box of all node boxes, or `None` for an empty layout.
    pub fn bounds(&self) -> Option<Rect> {
        self.nodes
            .iter()
            .map(LayoutNode::rect)
            .reduce(|acc, r| acc.union(&r))
    }

    /// Mutable access to the first node with `id`.
    pub fn node_mut(&mut self, id: &str) -> Option<&mut LayoutNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }
}

/// Choose the layout mode for a graph.
///
/// Explicit only when every node has a persisted position. A single missing
/// position sends the whole graph through auto layout.
pub fn select_mode(graph: &Graph) -> LayoutMode {
    if !graph.is_empty() && graph.nodes().iter().all(|n| n.position.is_some()) {
        LayoutMode::Explicit
    } else {
        LayoutMode::Auto
    }
}

/// Position every node and derive the edge list.
///
/// Colors are assigned by input order from the palette.
pub fn layout(graph: &Graph, config: &LayoutConfig) -> Layout {
    let mode = select_mode(graph);
    let positions: Vec<Point> = match mode {
        LayoutMode::Explicit => graph
            .nodes()
            .iter()
            .map(|n| n.position.unwrap_or_default())
            .collect(),
        LayoutMode::Auto => auto::layered_positions(graph, config),
    };
    tracing::debug!(?mode, nodes = graph.len(), "layout computed");

    let nodes = graph
        .nodes()
        .iter()
        .zip(positions)
        .enumerate()
        .map(|(i, (node, pos))| LayoutNode {
            id: node.id.clone(),
            label: node.label.clone(),
            x: pos.x,
            y: pos.y,
            width: config.node_width,
            height: config.node_height,
            color: palette_color(i),
        })
        .collect();

    Layout {
        mode,
        nodes,
        edges: graph.edges(),
    }
}
