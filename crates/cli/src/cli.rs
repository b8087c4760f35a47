//! Command-line definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "agent-runtime", version)]
#[command(about = "Run rule-based and learning agents")]
pub struct Cli {
    /// Runtime configuration file (.json, .toml, .yaml or .yml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer JSON operations read line by line from stdin
    Serve,
    /// Talk to one agent interactively
    Chat {
        /// Id of a configured agent
        #[arg(long)]
        agent: String,
    },
}
