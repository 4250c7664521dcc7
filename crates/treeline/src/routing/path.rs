use super::plan::RoutingPlan;
use super::types::{ALIGN_TOLERANCE, EdgePath, LayerSpan, PathKind, RouteResult};
use crate::geometry::{Point, Rect};
use crate::graph::Edge;
use crate::theme::NEUTRAL;

/// Route one edge through the plan's shared geometry, resolving both boxes from the plan.
pub fn route_with_plan(plan: &RoutingPlan, edge: &Edge) -> RouteResult {
    match (plan.node_box(&edge.source), plan.node_box(&edge.target)) {
        (Some(source), Some(target)) => RouteResult::Routed(route_edge(plan, edge, source, target)),
        (None, _) => RouteResult::Unresolved {
            warning: format!("Unknown source node '{}'", edge.source),
        },
        (_, None) => RouteResult::Unresolved {
            warning: format!("Unknown target node '{}'", edge.target),
        },
    }
}

/// Route one edge between two boxes.
///
/// The boxes may be newer than the plan. A channel the plan does not know is
/// computed on the spot, and a trunk whose x no longer lines up with the target
/// is ignored so the edge routes on its own.
pub fn route_edge(plan: &RoutingPlan, edge: &Edge, source: Rect, target: Rect) -> EdgePath {
    let start = source.bottom_center();
    let end = target.top_center();
    let color = plan.color(&edge.target).unwrap_or(NEUTRAL);

    if (start.x - end.x).abs() < ALIGN_TOLERANCE {
        tracing::trace!(source = %edge.source, target = %edge.target, "straight");
        return EdgePath {
            kind: PathKind::Straight,
            points: vec![start, Point::new(start.x, end.y)],
            color,
        };
    }

    if let Some(trunk) = plan
        .trunk(&edge.target)
        .filter(|trunk| (trunk.x - end.x).abs() < ALIGN_TOLERANCE)
    {
        tracing::trace!(source = %edge.source, target = %edge.target, ?trunk, "via trunk");
        return EdgePath {
            kind: PathKind::Trunk,
            points: vec![
                start,
                Point::new(start.x, trunk.y),
                Point::new(trunk.x, trunk.y),
                Point::new(trunk.x, end.y),
            ],
            color,
        };
    }

    let span = LayerSpan::new(start.y, end.y);
    let channel_y = plan.channel_y(span).unwrap_or_else(|| span.midpoint());
    tracing::trace!(source = %edge.source, target = %edge.target, ?span, channel_y, "via channel");
    EdgePath {
        kind: PathKind::Channel,
        points: vec![
            start,
            Point::new(start.x, channel_y),
            Point::new(end.x, channel_y),
            end,
        ],
        color,
    }
}
