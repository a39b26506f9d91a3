//! bench-summary - Benchmark Export Summarizer
//!
//! A CLI tool that locates the newest load-test artifact run, tolerantly
//! parses its JSON/JSONL export files, and summarizes per-request latency
//! and throughput metrics as p50/p95/p99/avg tables in TSV and Markdown.
//!
//! ## Usage
//!
//! ```bash
//! # Summarize the newest run under ./artifacts
//! bench-summary summarize
//!
//! # Summarize a specific run directory
//! bench-summary summarize --run-dir artifacts/20260807_113000
//!
//! # List available runs
//! bench-summary list --detailed
//!
//! # Write a starter config file
//! bench-summary config init
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

mod artifacts;
mod cli;
mod config;
mod metrics;
mod models;
mod report;
mod utils;

use artifacts::{find_export_files, find_latest_run, list_runs, load_records, SummaryError};
use cli::Args;
use config::{ConfigFile, EnvConfig, SummaryConfig};
use report::SummaryReport;
use utils::{init_logger, LogLevel};

fn main() -> Result<()> {
    let args = Args::parse();

    let env = EnvConfig::load();
    let level = if args.verbose || env.verbose.unwrap_or(false) {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    init_logger(level);

    match args.command {
        cli::Command::Summarize(summarize_args) => run_summarize(summarize_args, &env),
        cli::Command::List(list_args) => run_list(list_args, &env),
        cli::Command::Config(config_args) => manage_config(config_args),
    }
}

/// Resolve the effective configuration: defaults, then config file, then
/// environment variables, then CLI flags.
fn resolve_config(
    artifacts_root: Option<&str>,
    tsv_out: Option<&str>,
    md_out: Option<&str>,
    env: &EnvConfig,
) -> Result<SummaryConfig> {
    let mut config = ConfigFile::load_default()?.summary.merged_with_env(env);

    if let Some(root) = artifacts_root {
        config.artifacts_root = PathBuf::from(root);
    }
    if let Some(path) = tsv_out {
        config.tsv_output = PathBuf::from(path);
    }
    if let Some(path) = md_out {
        config.md_output = PathBuf::from(path);
    }

    Ok(config)
}

fn run_summarize(args: cli::SummarizeArgs, env: &EnvConfig) -> Result<()> {
    let config = resolve_config(
        args.artifacts_root.as_deref(),
        args.tsv_out.as_deref(),
        args.md_out.as_deref(),
        env,
    )?;

    let run_dir = match args.run_dir.clone().or_else(|| env.run_dir.clone()) {
        Some(dir) => PathBuf::from(dir),
        None => find_latest_run(&config.artifacts_root)?,
    };
    info!("Using artifact directory: {}", run_dir.display());

    let files = find_export_files(&run_dir)?;
    if files.is_empty() {
        return Err(SummaryError::NoExportFiles(run_dir).into());
    }

    let records = load_records(&files)?;
    if records.is_empty() {
        return Err(SummaryError::NoRecords.into());
    }
    info!("Loaded {} records", records.len());

    let report = SummaryReport::build(&run_dir, &records);
    report.write(&config.tsv_output, &config.md_output)?;

    Ok(())
}

fn run_list(args: cli::ListArgs, env: &EnvConfig) -> Result<()> {
    let config = resolve_config(args.artifacts_root.as_deref(), None, None, env)?;
    let runs = list_runs(&config.artifacts_root)?;

    if runs.is_empty() {
        println!(
            "No run directories under {}",
            config.artifacts_root.display()
        );
        return Ok(());
    }

    println!(
        "\nArtifact runs in {} (newest first):\n",
        config.artifacts_root.display()
    );

    for run in &runs {
        let files = find_export_files(&run.path).unwrap_or_default();
        println!(
            "  {:30} {}  ({} export file{})",
            run.name,
            run.modified.format("%Y-%m-%d %H:%M:%S UTC"),
            files.len(),
            if files.len() == 1 { "" } else { "s" }
        );

        if args.detailed {
            for file in &files {
                let name = file.file_name().and_then(|n| n.to_str()).unwrap_or("?");
                println!("      - {name}");
            }
        }
    }
    println!();

    Ok(())
}

fn manage_config(args: cli::ConfigArgs) -> Result<()> {
    match args.action {
        cli::ConfigAction::Init { output, force } => {
            let path = Path::new(&output);
            if path.exists() && !force {
                anyhow::bail!(
                    "Configuration file already exists: {output}. Use --force to overwrite."
                );
            }

            let config = ConfigFile::example();
            config.save(path)?;
            println!("✓ Configuration file created: {output}");
            println!("\nEdit the file to customize your settings.");
        }

        cli::ConfigAction::Show { env } => {
            if env {
                EnvConfig::load().print_summary();
            } else {
                let config = ConfigFile::load_default()?;
                println!("{}", serde_yaml::to_string(&config)?);
            }
        }

        cli::ConfigAction::Validate { file } => {
            let path = file
                .map(PathBuf::from)
                .or_else(ConfigFile::find)
                .unwrap_or_else(|| PathBuf::from("./bench-summary.yaml"));

            match ConfigFile::load(&path) {
                Ok(_) => {
                    println!("✓ Configuration file is valid: {}", path.display());
                }
                Err(e) => {
                    println!("✗ Configuration file is invalid: {}", path.display());
                    println!("  Error: {e}");
                    return Err(e);
                }
            }
        }

        cli::ConfigAction::Env => {
            config::print_env_help();
        }
    }

    Ok(())
}
