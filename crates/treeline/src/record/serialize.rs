use std::collections::HashMap;

use super::{FIELD_SEPARATOR, LIST_SEPARATOR};
use crate::geometry::Point;
use crate::graph::Edge;
use crate::layout::LayoutNode;

/// Serialize the current diagram state back to records.
///
/// Nodes are written in sequence order. Each node's children are rebuilt from
/// `edges` (every edge whose source is that node, in edge order), so the output
/// reflects the live topology rather than the children text originally parsed.
/// Positions are rounded to integers. Every line ends with a newline.
pub fn serialize(nodes: &[LayoutNode], edges: &[Edge]) -> String {
    let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in edges {
        children
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    let mut out = String::new();
    for node in nodes {
        let kids = children.get(node.id.as_str()).map_or(&[][..], Vec::as_slice);
        out.push_str(&format_record(&node.id, &node.label, kids, node.position()));
        out.push('\n');
    }
    out
}

/// Format one record as `id,label,children,x;y`, without a line terminator.
pub fn format_record(id: &str, label: &str, children: &[&str], position: Point) -> String {
    if label.contains(FIELD_SEPARATOR) {
        tracing::warn!(id, "label contains a comma and will not parse back as written");
    }
    let x = format_coordinate(position.x);
    let y = format_coordinate(position.y);
    let children = children.join(&LIST_SEPARATOR.to_string());
    format!("{id}{FIELD_SEPARATOR}{label}{FIELD_SEPARATOR}{children}{FIELD_SEPARATOR}{x}{LIST_SEPARATOR}{y}")
}

/// Round to the nearest integer and print without a fraction.
///
/// Formats the rounded `f64` itself so coordinates beyond the `i64` range are
/// written unchanged. Negative zero prints as `0`.
fn format_coordinate(v: f64) -> String {
    let rounded = v.round();
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded:.0}")
    }
}
