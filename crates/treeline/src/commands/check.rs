use anyhow::Result;
use colored::Colorize;
use std::collections::HashSet;
use std::path::Path;

use crate::config::Config;

pub fn run(file: &Path, config: &Config) -> Result<()> {
    let diagram = super::load_diagram(file, &config.layout_config())?;
    let graph = &diagram.graph;

    println!("{}", file.display().to_string().bold());
    println!("  {:<10} {}", "records".dimmed(), graph.len());
    println!("  {:<10} {:?}", "mode".dimmed(), diagram.layout.mode);
    let roots = graph.roots();
    if roots.is_empty() {
        println!("  {:<10} {}", "roots".dimmed(), "(none, every node is a child)".yellow());
    } else {
        println!("  {:<10} {}", "roots".dimmed(), roots.join(", "));
    }

    println!();
    println!("{}", "Depths".bold());
    let depths = graph.depths();
    let mut seen = HashSet::new();
    for node in graph.nodes() {
        if !seen.insert(node.id.as_str()) {
            continue;
        }
        let depth = depths.get(&node.id).copied().unwrap_or_default();
        println!("  {:>3}  {}", depth, node.id);
    }

    let duplicates = graph.duplicate_ids();
    let dangling = graph.dangling_references();
    if duplicates.is_empty() && dangling.is_empty() {
        println!();
        println!("{}", "No problems found".green());
        return Ok(());
    }

    println!();
    println!("{}", "Problems".bold());
    for id in duplicates {
        println!("  {} duplicate id '{id}' (first record wins)", "warning:".yellow());
    }
    for (parent, child) in dangling {
        println!(
            "  {} '{parent}' lists unknown child '{child}'",
            "warning:".yellow()
        );
    }
    Ok(())
}
