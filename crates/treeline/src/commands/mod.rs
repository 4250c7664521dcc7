pub mod check;
pub mod completion;
pub mod config;
pub mod fmt;
pub mod layout;
pub mod snap;

use anyhow::{Context, Result};
use std::path::Path;

use treeline::Diagram;
use treeline::layout::LayoutConfig;

/// Read, parse, lay out and route a record file.
///
/// Fails when the file is missing or yields no usable records.
pub(crate) fn load_diagram(file: &Path, config: &LayoutConfig) -> Result<Diagram> {
    if !file.exists() {
        anyhow::bail!("File not found: {}", file.display());
    }
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    Diagram::from_text(&text, config)
        .ok_or_else(|| anyhow::anyhow!("{}: no usable records", file.display()))
}
