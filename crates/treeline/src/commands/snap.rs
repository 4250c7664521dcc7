use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use treeline::geometry::Point;
use treeline::snap::snap_with_anchors;

use crate::config::Config;

pub fn run(file: &Path, id: &str, x: f64, y: f64, threshold: f64, config: &Config) -> Result<()> {
    let diagram = super::load_diagram(file, &config.layout_config())?;
    if !diagram.graph.contains(id) {
        anyhow::bail!("Unknown node: {id}");
    }

    let outcome = snap_with_anchors(id, Point::new(x, y), &diagram.layout.nodes, threshold);
    println!("{} {}", outcome.position.x, outcome.position.y);

    let anchor = |axis: &str, value: Option<&str>| match value {
        Some(other) => println!("  {} aligned with '{other}'", axis.dimmed()),
        None => println!("  {} {}", axis.dimmed(), "free".dimmed()),
    };
    anchor("x", outcome.x_anchor.as_deref());
    anchor("y", outcome.y_anchor.as_deref());
    Ok(())
}
