use super::{FIELD_SEPARATOR, LIST_SEPARATOR};
use crate::geometry::Point;
use crate::graph::{Graph, GraphNode};

/// Parse a whole document into a graph. Records that yield no node are skipped.
pub fn parse(text: &str) -> Graph {
    let mut nodes = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        match parse_record(line) {
            Some(node) => nodes.push(node),
            None => {
                if !line.trim().is_empty() {
                    tracing::debug!(line = line_no + 1, "skipping record with fewer than 2 fields");
                }
            }
        }
    }
    tracing::debug!(nodes = nodes.len(), "parsed records");
    Graph::new(nodes)
}

/// Parse one line. Returns `None` when the line has fewer than two fields.
///
/// A label containing a comma spills into the following fields; the format has
/// no quoting.
pub fn parse_record(line: &str) -> Option<GraphNode> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < 2 {
        return None;
    }

    let children = fields
        .get(2)
        .map(|raw| parse_children(raw))
        .unwrap_or_default();
    let position = fields.get(3).and_then(|raw| parse_position(raw));

    Some(GraphNode {
        id: fields[0].trim().to_string(),
        label: fields[1].trim().to_string(),
        children,
        position,
    })
}

/// Split a `;`-joined child list. Blank tokens are dropped.
fn parse_children(raw: &str) -> Vec<String> {
    raw.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `x;y`. Both parts must be finite numbers, otherwise the position is absent.
fn parse_position(raw: &str) -> Option<Point> {
    let (x, y) = raw.split_once(LIST_SEPARATOR)?;
    let x: f64 = x.trim().parse().ok()?;
    let y: f64 = y.trim().parse().ok()?;
    (x.is_finite() && y.is_finite()).then_some(Point::new(x, y))
}
