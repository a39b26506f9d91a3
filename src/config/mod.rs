//! Configuration module
//!
//! Handles the artifacts root and output paths plus their file and
//! environment overrides.

#![allow(dead_code)]

mod env;
mod file;

pub use env::{print_env_help, EnvBuilder, EnvConfig, EnvGuard};
pub use file::ConfigFile;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Summarization configuration
///
/// The only process-wide parameters: where artifacts live and where the two
/// summary files go. Passed explicitly so tests can point at alternate
/// directories.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Root directory scanned for run directories
    #[serde(default = "default_artifacts_root")]
    pub artifacts_root: PathBuf,

    /// TSV output path
    #[serde(default = "default_tsv_output")]
    pub tsv_output: PathBuf,

    /// Markdown output path
    #[serde(default = "default_md_output")]
    pub md_output: PathBuf,
}

fn default_artifacts_root() -> PathBuf {
    PathBuf::from("artifacts")
}

fn default_tsv_output() -> PathBuf {
    PathBuf::from("summary.tsv")
}

fn default_md_output() -> PathBuf {
    PathBuf::from("summary.md")
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            artifacts_root: default_artifacts_root(),
            tsv_output: default_tsv_output(),
            md_output: default_md_output(),
        }
    }
}

impl SummaryConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the artifacts root
    pub fn with_artifacts_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.artifacts_root = root.into();
        self
    }

    /// Set the TSV output path
    pub fn with_tsv_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.tsv_output = path.into();
        self
    }

    /// Set the Markdown output path
    pub fn with_md_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.md_output = path.into();
        self
    }

    /// Apply environment overrides on top of this configuration
    pub fn merged_with_env(mut self, env: &EnvConfig) -> Self {
        if let Some(root) = &env.artifacts_root {
            self.artifacts_root = PathBuf::from(root);
        }
        if let Some(path) = &env.tsv_output {
            self.tsv_output = PathBuf::from(path);
        }
        if let Some(path) = &env.md_output {
            self.md_output = PathBuf::from(path);
        }
        self
    }
}
