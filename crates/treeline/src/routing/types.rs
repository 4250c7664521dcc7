use std::fmt;

use serde::Serialize;

use crate::geometry::Point;
use crate::graph::Edge;
use crate::theme::Color;

/// Horizontal distance under which a source and target count as vertically aligned.
pub const ALIGN_TOLERANCE: f64 = 1.0;

/// Pair of layer boundaries an edge spans: the source's bottom Y and the
/// target's top Y, rounded to integers.
///
/// Integer rounding makes Eq/Hash exact, so every edge between the same two
/// layers finds the same channel. Boundaries beyond the `i64` range saturate
/// and share a key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerSpan {
    pub source_y: i64,
    pub target_y: i64,
}

impl LayerSpan {
    pub fn new(source_bottom: f64, target_top: f64) -> Self {
        Self {
            source_y: source_bottom.round() as i64,
            target_y: target_top.round() as i64,
        }
    }

    /// Y of the shared horizontal channel: halfway between the two boundaries.
    pub fn midpoint(self) -> f64 {
        (self.source_y + self.target_y) as f64 / 2.0
    }
}

impl fmt::Debug for LayerSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.source_y, self.target_y)
    }
}

/// Which routing rule produced a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    /// Source and target are aligned: one vertical segment.
    Straight,
    /// Down to the shared channel, across, down to the target.
    Channel,
    /// Down to the target's trunk point, across, down the shared stem.
    Trunk,
}

/// An orthogonal polyline from the source's bottom face to the target's top face.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgePath {
    pub kind: PathKind,
    pub points: Vec<Point>,
    /// The target node's color.
    pub color: Color,
}

impl EdgePath {
    /// Total length of all segments.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1].x - w[0].x).abs() + (w[1].y - w[0].y).abs())
            .sum()
    }

    /// Whether every segment is horizontal or vertical.
    pub fn is_orthogonal(&self) -> bool {
        self.points
            .windows(2)
            .all(|w| w[0].x == w[1].x || w[0].y == w[1].y)
    }
}

/// Result for routing a single edge.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteResult {
    Routed(EdgePath),
    /// An endpoint id has no node box; the edge is kept but not drawn.
    Unresolved { warning: String },
}

impl RouteResult {
    pub fn path(&self) -> Option<&EdgePath> {
        match self {
            RouteResult::Routed(path) => Some(path),
            RouteResult::Unresolved { .. } => None,
        }
    }
}

/// Output of routing all edges of one layout.
#[derive(Debug, Clone)]
pub struct RoutingOutput {
    pub plan: super::plan::RoutingPlan,
    pub results: Vec<(Edge, RouteResult)>,
}

impl RoutingOutput {
    /// Routed paths only, paired with their edge.
    pub fn paths(&self) -> impl Iterator<Item = (&Edge, &EdgePath)> {
        self.results
            .iter()
            .filter_map(|(edge, result)| result.path().map(|p| (edge, p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_rounds_both_ends() {
        assert_eq!(LayerSpan::new(49.6, 120.2), LayerSpan::new(50.0, 119.9));
        assert_ne!(LayerSpan::new(50.0, 120.0), LayerSpan::new(50.0, 240.0));
    }

    #[test]
    fn span_midpoint() {
        assert_eq!(LayerSpan::new(50.0, 120.0).midpoint(), 85.0);
        assert_eq!(LayerSpan::new(50.0, 121.0).midpoint(), 85.5);
    }

    #[test]
    fn path_length_and_orthogonality() {
        let path = EdgePath {
            kind: PathKind::Channel,
            points: vec![
                Point::new(0.0, 50.0),
                Point::new(0.0, 85.0),
                Point::new(-100.0, 85.0),
                Point::new(-100.0, 120.0),
            ],
            color: Color::from_rgb(0, 0, 0),
        };
        assert_eq!(path.length(), 170.0);
        assert!(path.is_orthogonal());
    }
}
