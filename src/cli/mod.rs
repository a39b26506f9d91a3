//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};

/// Benchmark Export Summarizer
#[derive(Parser, Debug)]
#[command(name = "bench-summary")]
#[command(version)]
#[command(about = "Summarize load-test export artifacts into percentile tables")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize the newest artifact run into TSV and Markdown tables
    Summarize(SummarizeArgs),

    /// List artifact run directories
    List(ListArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for the summarize command
#[derive(Parser, Debug)]
pub struct SummarizeArgs {
    /// Artifacts root directory
    #[arg(short, long)]
    pub artifacts_root: Option<String>,

    /// Summarize a specific run directory instead of the newest one
    #[arg(short, long)]
    pub run_dir: Option<String>,

    /// TSV output path
    #[arg(long)]
    pub tsv_out: Option<String>,

    /// Markdown output path
    #[arg(long)]
    pub md_out: Option<String>,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Artifacts root directory
    #[arg(short, long)]
    pub artifacts_root: Option<String>,

    /// Show export files per run
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for config management
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create a configuration file with defaults
    Init {
        /// Output path
        #[arg(short, long, default_value = "./bench-summary.yaml")]
        output: String,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show the effective configuration
    Show {
        /// Show environment variable overrides instead
        #[arg(short, long)]
        env: bool,
    },

    /// Validate a configuration file
    Validate {
        /// Path to validate (defaults to the discovered file)
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Print supported environment variables
    Env,
}
