use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands, path: Option<&Path>) -> Result<()> {
    match command {
        ConfigCommands::Show => show(path),
        ConfigCommands::Set { key, value } => set(path, &key, &value),
    }
}

fn show(path: Option<&Path>) -> Result<()> {
    let location = match path {
        Some(p) => p.to_path_buf(),
        None => Config::path()?,
    };
    let config = Config::resolve(path)?;
    let layout = config.layout_config();
    let format = config.output_format()?;

    println!("{} {}", "Config file:".bold(), location.display());
    if !location.exists() {
        println!("  {}", "(not created yet, showing defaults)".dimmed());
    }
    println!();

    let rows: [(&str, String, bool); 6] = [
        (
            "layout.node_width",
            layout.node_width.to_string(),
            is_set(&config, |c| c.layout.as_ref()?.node_width),
        ),
        (
            "layout.node_height",
            layout.node_height.to_string(),
            is_set(&config, |c| c.layout.as_ref()?.node_height),
        ),
        (
            "layout.horizontal_spacing",
            layout.horizontal_spacing.to_string(),
            is_set(&config, |c| c.layout.as_ref()?.horizontal_spacing),
        ),
        (
            "layout.vertical_spacing",
            layout.vertical_spacing.to_string(),
            is_set(&config, |c| c.layout.as_ref()?.vertical_spacing),
        ),
        (
            "snap.threshold",
            config.snap_threshold().to_string(),
            is_set(&config, |c| c.snap.as_ref()?.threshold),
        ),
        (
            "output.format",
            format!("{format:?}").to_lowercase(),
            config.output.as_ref().and_then(|o| o.format.as_ref()).is_some(),
        ),
    ];
    for (key, value, set) in rows {
        if set {
            println!("  {key:<26} {value}");
        } else {
            println!("  {key:<26} {value} {}", "(default)".dimmed());
        }
    }
    Ok(())
}

fn is_set(config: &Config, get: impl Fn(&Config) -> Option<f64>) -> bool {
    get(config).is_some()
}

fn set(path: Option<&Path>, key: &str, value: &str) -> Result<()> {
    let mut config = Config::resolve(path)?;
    config.set(key, value)?;
    let saved = match path {
        Some(p) => {
            config.save_to(p)?;
            p.to_path_buf()
        }
        None => config.save()?,
    };
    println!(
        "{} {key} = {value} ({})",
        "Set".green().bold(),
        saved.display()
    );
    Ok(())
}
