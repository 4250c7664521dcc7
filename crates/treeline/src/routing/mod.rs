pub mod path;
pub mod plan;
pub mod serialize;
pub mod types;

#[cfg(test)]
mod tests;

use crate::graph::Edge;
use crate::layout::LayoutNode;
use path::route_with_plan;
use plan::RoutingPlan;
use types::RoutingOutput;

/// Route all edges of a layout.
///
/// Builds one [`RoutingPlan`] from the current node boxes, then projects every
/// edge through it on the calling thread. Results keep edge order.
///
/// # Arguments
/// * `nodes`: Positioned nodes. For repeated ids the first node wins.
/// * `edges`: Directed parent → child edges. Edges with an unknown endpoint
///   come back as `RouteResult::Unresolved`.
///
/// # Returns
/// A `RoutingOutput` holding the plan and a result for each edge.
pub fn route_all_edges(nodes: &[LayoutNode], edges: &[Edge]) -> RoutingOutput {
    let plan = RoutingPlan::build(nodes, edges);

    let results = edges
        .iter()
        .map(|edge| (edge.clone(), route_with_plan(&plan, edge)))
        .collect();

    RoutingOutput { plan, results }
}
