use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

/// docview: offline preview and inspection for the documentation pane.
#[derive(Parser, Debug)]
#[command(name = "docview", version, about)]
pub struct Args {
    /// Log level override (debug, info, warning, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a raw documentation body into a full HTML page on stdout.
    Render {
        /// File holding the raw body; stdin when omitted.
        file: Option<PathBuf>,

        /// Use the dark stylesheet regardless of config.
        #[arg(long)]
        dark: bool,

        /// Config file path override.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the effective configuration as JSON.
    Config {
        /// Config file path override.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Args {
    /// Config override carried by whichever subcommand was given.
    pub fn config_override(&self) -> Option<&Path> {
        match &self.command {
            Command::Render { config, .. } => config.as_deref(),
            Command::Config { config } => config.as_deref(),
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
