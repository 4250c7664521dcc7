use std::collections::HashMap;

use super::types::{ALIGN_TOLERANCE, LayerSpan};
use crate::geometry::{Point, Rect};
use crate::graph::Edge;
use crate::layout::LayoutNode;
use crate::theme::Color;

/// Routing geometry shared by every edge of one layout.
///
/// Built once from a snapshot of node positions and never mutated. When nodes
/// move, the caller builds a new plan; an old plan is not invalidated.
#[derive(Debug, Clone, Default)]
pub struct RoutingPlan {
    boxes: HashMap<String, Rect>,
    channels: HashMap<LayerSpan, f64>,
    trunks: HashMap<String, Point>,
    colors: HashMap<String, Color>,
}

impl RoutingPlan {
    pub fn build(nodes: &[LayoutNode], edges: &[Edge]) -> Self {
        let mut boxes = HashMap::with_capacity(nodes.len());
        let mut colors = HashMap::with_capacity(nodes.len());
        for node in nodes {
            boxes.entry(node.id.clone()).or_insert_with(|| node.rect());
            colors.entry(node.id.clone()).or_insert(node.color);
        }

        // Edges whose endpoints both have boxes.
        let resolved: Vec<(&Edge, Rect, Rect)> = edges
            .iter()
            .filter_map(|edge| {
                let source = boxes.get(&edge.source)?;
                let target = boxes.get(&edge.target)?;
                Some((edge, *source, *target))
            })
            .collect();

        // target id -> bottom Y of each incoming edge's source
        let mut incoming: HashMap<&str, Vec<f64>> = HashMap::new();
        for (edge, source, _) in &resolved {
            incoming
                .entry(edge.target.as_str())
                .or_default()
                .push(source.bottom());
        }

        let trunks: HashMap<String, Point> = incoming
            .into_iter()
            .filter(|(_, bottoms)| bottoms.len() > 1)
            .filter_map(|(target, bottoms)| {
                let rect = boxes.get(target)?;
                let highest = bottoms.into_iter().fold(f64::INFINITY, f64::min);
                Some((
                    target.to_string(),
                    Point::new(rect.center_x(), (highest + rect.top()) / 2.0),
                ))
            })
            .collect();

        // Only edges that neither run straight nor join a trunk need a channel.
        let mut channels: HashMap<LayerSpan, f64> = HashMap::new();
        for (edge, source, target) in &resolved {
            let aligned = (source.center_x() - target.center_x()).abs() < ALIGN_TOLERANCE;
            if aligned || trunks.contains_key(&edge.target) {
                continue;
            }
            let span = LayerSpan::new(source.bottom(), target.top());
            channels.entry(span).or_insert_with(|| span.midpoint());
        }

        tracing::debug!(
            channels = channels.len(),
            trunks = trunks.len(),
            "routing plan built"
        );
        Self {
            boxes,
            channels,
            trunks,
            colors,
        }
    }

    /// Box of the first node with `id`.
    pub fn node_box(&self, id: &str) -> Option<Rect> {
        self.boxes.get(id).copied()
    }

    /// Shared channel Y for edges spanning `span`, if any edge in the plan did.
    pub fn channel_y(&self, span: LayerSpan) -> Option<f64> {
        self.channels.get(&span).copied()
    }

    /// Trunk anchor for a target with more than one incoming edge.
    pub fn trunk(&self, target: &str) -> Option<Point> {
        self.trunks.get(target).copied()
    }

    pub fn color(&self, id: &str) -> Option<Color> {
        self.colors.get(id).copied()
    }

    pub fn channels(&self) -> &HashMap<LayerSpan, f64> {
        &self.channels
    }

    pub fn trunks(&self) -> &HashMap<String, Point> {
        &self.trunks
    }
}
