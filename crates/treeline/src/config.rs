use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use treeline::layout::LayoutConfig;
use treeline::snap::SNAP_THRESHOLD;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "treeline";

pub const VALID_KEYS: &[&str] = &[
    "layout.node_width",
    "layout.node_height",
    "layout.horizontal_spacing",
    "layout.vertical_spacing",
    "snap.threshold",
    "output.format",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutSection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snap: Option<SnapSection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_width: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_height: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_spacing: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_spacing: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `treeline config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Load from an explicit `--config` path, or fall back to the default
    /// location. A missing explicit file means defaults; a broken one is an error.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load_from(path),
            Some(_) => Ok(Self::default()),
            None => Ok(Self::load_or_default()),
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# treeline configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "layout.node_width" => {
                self.layout
                    .get_or_insert_with(LayoutSection::default)
                    .node_width = Some(parse_positive(key, value)?);
            }
            "layout.node_height" => {
                self.layout
                    .get_or_insert_with(LayoutSection::default)
                    .node_height = Some(parse_positive(key, value)?);
            }
            "layout.horizontal_spacing" => {
                self.layout
                    .get_or_insert_with(LayoutSection::default)
                    .horizontal_spacing = Some(parse_positive(key, value)?);
            }
            "layout.vertical_spacing" => {
                self.layout
                    .get_or_insert_with(LayoutSection::default)
                    .vertical_spacing = Some(parse_positive(key, value)?);
            }
            "snap.threshold" => {
                self.snap.get_or_insert_with(SnapSection::default).threshold =
                    Some(parse_positive(key, value)?);
            }
            "output.format" => {
                match value {
                    "text" | "json" => {}
                    _ => anyhow::bail!("Invalid output format: {value}. Must be 'text' or 'json'."),
                }
                self.output.get_or_insert_with(OutputSection::default).format =
                    Some(value.to_string());
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: {}",
                VALID_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Layout constants with config overrides applied.
    pub fn layout_config(&self) -> LayoutConfig {
        let defaults = LayoutConfig::default();
        let Some(section) = &self.layout else {
            return defaults;
        };
        LayoutConfig {
            node_width: section.node_width.unwrap_or(defaults.node_width),
            node_height: section.node_height.unwrap_or(defaults.node_height),
            horizontal_spacing: section
                .horizontal_spacing
                .unwrap_or(defaults.horizontal_spacing),
            vertical_spacing: section
                .vertical_spacing
                .unwrap_or(defaults.vertical_spacing),
        }
    }

    pub fn snap_threshold(&self) -> f64 {
        self.snap
            .as_ref()
            .and_then(|s| s.threshold)
            .unwrap_or(SNAP_THRESHOLD)
    }

    /// Configured output format, defaulting to text.
    pub fn output_format(&self) -> Result<OutputFormat> {
        match self.output.as_ref().and_then(|o| o.format.as_deref()) {
            None => Ok(OutputFormat::Text),
            Some(value) => OutputFormat::from_str(value, true).map_err(|_| {
                anyhow::anyhow!("Invalid output.format in config: {value}. Must be 'text' or 'json'.")
            }),
        }
    }
}

fn parse_positive(key: &str, value: &str) -> Result<f64> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => anyhow::bail!("Invalid value for {key}: {value}. Must be a positive number."),
    }
}
