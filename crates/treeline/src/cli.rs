use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "treeline")]
#[command(author, version, about)]
#[command(long_about = "Lay out and route tree diagrams stored as line records.\n\n\
    Each line is `id,label,child1;child2,x;y`. Records without a position are\n\
    placed by depth; connectors are routed as orthogonal polylines.\n\n\
    Examples:\n  \
    treeline layout tree.csv             Print node boxes and connector paths\n  \
    treeline layout tree.csv -f json     Same, as JSON\n  \
    treeline fmt tree.csv --write        Pin every position in the file\n  \
    treeline snap tree.csv 2 8 125       Where would node 2 land?")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lay out a diagram and print node boxes and connector paths
    Layout {
        /// Record file to lay out
        file: PathBuf,

        /// Output format (defaults to output.format from the config, then text)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Rewrite a diagram with every position pinned
    Fmt {
        /// Record file to format
        file: PathBuf,

        /// Replace the file instead of printing to stdout
        #[arg(short, long)]
        write: bool,
    },

    /// Report roots, depths and problems in a diagram
    Check {
        /// Record file to check
        file: PathBuf,
    },

    /// Show where a node would land when moved to a position
    Snap {
        /// Record file to lay out
        file: PathBuf,

        /// Id of the node being moved
        id: String,

        /// Proposed x
        #[arg(allow_negative_numbers = true)]
        x: f64,

        /// Proposed y
        #[arg(allow_negative_numbers = true)]
        y: f64,

        /// Snap distance (defaults to snap.threshold from the config)
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. layout.node_width, snap.threshold, output.format)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let config_path = self.config;
        match self.command {
            Commands::Config { command } => {
                crate::commands::config::run(command, config_path.as_deref())
            }
            Commands::Completion { shell } => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Commands::Version => {
                println!(
                    "{} {}",
                    env!("CARGO_PKG_NAME"),
                    env!("CARGO_PKG_VERSION")
                );
                Ok(())
            }
            Commands::Layout { file, format } => {
                let config = Config::resolve(config_path.as_deref())?;
                let format = match format {
                    Some(format) => format,
                    None => config.output_format()?,
                };
                crate::commands::layout::run(&file, format, &config)
            }
            Commands::Fmt { file, write } => {
                let config = Config::resolve(config_path.as_deref())?;
                crate::commands::fmt::run(&file, write, &config)
            }
            Commands::Check { file } => {
                let config = Config::resolve(config_path.as_deref())?;
                crate::commands::check::run(&file, &config)
            }
            Commands::Snap {
                file,
                id,
                x,
                y,
                threshold,
            } => {
                let config = Config::resolve(config_path.as_deref())?;
                let threshold = threshold.unwrap_or_else(|| config.snap_threshold());
                if !threshold.is_finite() || threshold <= 0.0 {
                    anyhow::bail!("Invalid threshold: {threshold}. Must be a positive number.");
                }
                crate::commands::snap::run(&file, &id, x, y, threshold, &config)
            }
        }
    }
}
