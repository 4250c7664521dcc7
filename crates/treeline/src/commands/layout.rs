use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use treeline::Diagram;
use treeline::geometry::{Point, Rect};
use treeline::layout::{LayoutMode, LayoutNode};
use treeline::routing::serialize::path_to_string;
use treeline::routing::types::{PathKind, RouteResult};
use treeline::theme::Color;

use crate::cli::OutputFormat;
use crate::config::Config;

pub fn run(file: &Path, format: OutputFormat, config: &Config) -> Result<()> {
    let diagram = super::load_diagram(file, &config.layout_config())?;
    match format {
        OutputFormat::Text => print_text(&diagram),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonLayout::from(&diagram))?;
            println!("{json}");
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonLayout<'a> {
    mode: LayoutMode,
    bounds: Option<Rect>,
    nodes: &'a [LayoutNode],
    edges: Vec<JsonEdge<'a>>,
    channels: Vec<JsonChannel>,
    trunks: Vec<JsonTrunk<'a>>,
}

#[derive(Serialize)]
struct JsonEdge<'a> {
    source: &'a str,
    target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<PathKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonChannel {
    source_y: i64,
    target_y: i64,
    y: f64,
}

#[derive(Serialize)]
struct JsonTrunk<'a> {
    target: &'a str,
    at: Point,
}

impl<'a> From<&'a Diagram> for JsonLayout<'a> {
    fn from(diagram: &'a Diagram) -> Self {
        let edges = diagram
            .routing
            .results
            .iter()
            .map(|(edge, result)| match result {
                RouteResult::Routed(path) => JsonEdge {
                    source: &edge.source,
                    target: &edge.target,
                    kind: Some(path.kind),
                    color: Some(path.color),
                    path: Some(path_to_string(&path.points)),
                    warning: None,
                },
                RouteResult::Unresolved { warning } => JsonEdge {
                    source: &edge.source,
                    target: &edge.target,
                    kind: None,
                    color: None,
                    path: None,
                    warning: Some(warning.as_str()),
                },
            })
            .collect();

        let mut channels: Vec<JsonChannel> = diagram
            .routing
            .plan
            .channels()
            .iter()
            .map(|(span, &y)| JsonChannel {
                source_y: span.source_y,
                target_y: span.target_y,
                y,
            })
            .collect();
        channels.sort_by_key(|c| (c.source_y, c.target_y));

        let mut trunks: Vec<JsonTrunk> = diagram
            .routing
            .plan
            .trunks()
            .iter()
            .map(|(target, &at)| JsonTrunk { target, at })
            .collect();
        trunks.sort_by(|a, b| a.target.cmp(b.target));

        Self {
            mode: diagram.layout.mode,
            bounds: diagram.layout.bounds(),
            nodes: &diagram.layout.nodes,
            edges,
            channels,
            trunks,
        }
    }
}

fn print_text(diagram: &Diagram) {
    let layout = &diagram.layout;
    println!(
        "{} {:?} layout, {} nodes, {} edges",
        "Layout:".bold(),
        layout.mode,
        layout.nodes.len(),
        layout.edges.len()
    );
    if let Some(bounds) = layout.bounds() {
        println!(
            "{} ({}, {}) to ({}, {})",
            "Bounds:".bold(),
            bounds.left(),
            bounds.top(),
            bounds.right(),
            bounds.bottom()
        );
    }

    println!();
    println!("{}", "Nodes".bold());
    let id_width = layout.nodes.iter().map(|n| n.id.len()).max().unwrap_or(0);
    for node in &layout.nodes {
        println!(
            "  {:<id_width$}  {:>6} {:>6}  {}  {}",
            node.id,
            node.x,
            node.y,
            node.color.to_hex().truecolor(node.color.r, node.color.g, node.color.b),
            node.display_label()
        );
    }

    if diagram.routing.results.is_empty() {
        return;
    }
    println!();
    println!("{}", "Edges".bold());
    for (edge, result) in &diagram.routing.results {
        let arrow = format!("{} -> {}", edge.source, edge.target);
        match result {
            RouteResult::Routed(path) => println!(
                "  {arrow:<width$}  {:<8} {}",
                format!("{:?}", path.kind).to_lowercase().dimmed(),
                path_to_string(&path.points),
                width = id_width * 2 + 4
            ),
            RouteResult::Unresolved { warning } => println!(
                "  {arrow:<width$}  {} {warning}",
                "skipped".yellow(),
                width = id_width * 2 + 4
            ),
        }
    }
}
