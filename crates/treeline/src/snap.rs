//! Alignment snapping for interactive node moves.

use serde::Serialize;

use crate::geometry::Point;
use crate::layout::LayoutNode;

/// Distance under which a moving node's coordinate locks onto a neighbour's.
pub const SNAP_THRESHOLD: f64 = 15.0;

/// Adjusted position plus the neighbour each axis locked onto.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapOutcome {
    pub position: Point,
    /// Node whose x was taken, if any.
    pub x_anchor: Option<String>,
    /// Node whose y was taken, if any.
    pub y_anchor: Option<String>,
}

impl SnapOutcome {
    pub fn snapped(&self) -> bool {
        self.x_anchor.is_some() || self.y_anchor.is_some()
    }
}

/// Adjust a candidate position for node `moving_id`.
///
/// See [`snap_with_anchors`] for the matching rule.
pub fn snap(moving_id: &str, candidate: Point, nodes: &[LayoutNode], threshold: f64) -> Point {
    snap_with_anchors(moving_id, candidate, nodes, threshold).position
}

/// Adjust a candidate position and report which nodes it aligned to.
///
/// Every node other than `moving_id` is visited in slice order. On each axis
/// independently, a node whose coordinate is strictly within `threshold` of
/// the running value replaces it. The running value is what gets compared,
/// so when several neighbours qualify the last one visited wins.
pub fn snap_with_anchors(
    moving_id: &str,
    candidate: Point,
    nodes: &[LayoutNode],
    threshold: f64,
) -> SnapOutcome {
    let mut position = candidate;
    let mut x_anchor = None;
    let mut y_anchor = None;

    for other in nodes.iter().filter(|n| n.id != moving_id) {
        if (other.x - position.x).abs() < threshold {
            position.x = other.x;
            x_anchor = Some(other.id.clone());
        }
        if (other.y - position.y).abs() < threshold {
            position.y = other.y;
            y_anchor = Some(other.id.clone());
        }
    }

    if x_anchor.is_some() || y_anchor.is_some() {
        tracing::trace!(
            moving = moving_id,
            ?candidate,
            ?position,
            ?x_anchor,
            ?y_anchor,
            "snapped"
        );
    }
    SnapOutcome {
        position,
        x_anchor,
        y_anchor,
    }
}
