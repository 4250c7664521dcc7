use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::config::Config;

pub fn run(file: &Path, write: bool, config: &Config) -> Result<()> {
    let diagram = super::load_diagram(file, &config.layout_config())?;
    let text = diagram.to_text();

    if write {
        std::fs::write(file, &text)
            .with_context(|| format!("Failed to write {}", file.display()))?;
        tracing::info!(path = %file.display(), nodes = diagram.layout.nodes.len(), "rewrote records");
        eprintln!("{} {}", "Wrote".green().bold(), file.display());
    } else {
        print!("{text}");
    }
    Ok(())
}
