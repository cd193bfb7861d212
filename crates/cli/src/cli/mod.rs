pub mod config_cmd;
pub mod explain;
pub mod scan;

use clap::{Parser, Subcommand};

use crate::config::OutputMode;

#[derive(Parser)]
#[command(
    name = "scanfx",
    version,
    about = "Formatted input scanning with scanf-style formats"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Args, Clone)]
pub struct GlobalArgs {
    /// Output mode (overrides config).
    #[arg(long, value_enum, global = true, env = "SCANFX_OUTPUT")]
    pub output: Option<OutputMode>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan stdin (or a file) against a format.
    Scan(ScanArgs),

    /// Show the directives a format compiles to.
    Explain(ExplainArgs),

    /// View / edit configuration.
    Config(ConfigArgs),
}

//  Subcommand argument structs

#[derive(Debug, clap::Args, Clone)]
pub struct ScanArgs {
    /// Format string (default: `default_format` from config).
    pub format: Option<String>,

    /// Read from this file instead of stdin.
    #[arg(long, short)]
    pub input: Option<std::path::PathBuf>,

    /// Run the format again until it stops matching.
    #[arg(long)]
    pub repeat: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct ExplainArgs {
    /// Format string to compile.
    pub format: String,
}

#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Display the current configuration.
    Show,
    /// Set a configuration value (`output`, `log_filter`, `default_format`).
    Set { key: String, value: String },
}
