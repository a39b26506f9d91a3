//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "BENCH_SUMMARY";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Artifacts root from BENCH_SUMMARY_ARTIFACTS
    pub artifacts_root: Option<String>,
    /// Explicit run directory from BENCH_SUMMARY_RUN_DIR
    pub run_dir: Option<String>,
    /// TSV output path from BENCH_SUMMARY_TSV_OUT
    pub tsv_output: Option<String>,
    /// Markdown output path from BENCH_SUMMARY_MD_OUT
    pub md_output: Option<String>,
    /// Verbose from BENCH_SUMMARY_VERBOSE
    pub verbose: Option<bool>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            artifacts_root: get_env("ARTIFACTS"),
            run_dir: get_env("RUN_DIR"),
            tsv_output: get_env("TSV_OUT"),
            md_output: get_env("MD_OUT"),
            verbose: get_env_bool("VERBOSE"),
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.artifacts_root.is_some()
            || self.run_dir.is_some()
            || self.tsv_output.is_some()
            || self.md_output.is_some()
            || self.verbose.is_some()
    }

    /// Print current environment configuration
    pub fn print_summary(&self) {
        println!("Environment Configuration:");
        println!("  {}_ARTIFACTS: {:?}", ENV_PREFIX, self.artifacts_root);
        println!("  {}_RUN_DIR:   {:?}", ENV_PREFIX, self.run_dir);
        println!("  {}_TSV_OUT:   {:?}", ENV_PREFIX, self.tsv_output);
        println!("  {}_MD_OUT:    {:?}", ENV_PREFIX, self.md_output);
        println!("  {}_VERBOSE:   {:?}", ENV_PREFIX, self.verbose);
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

/// Get environment variable as boolean
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| {
        matches!(
            v.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "enabled"
        )
    })
}

/// Builder for setting environment variables (useful for testing)
pub struct EnvBuilder {
    vars: Vec<(String, String)>,
}

impl EnvBuilder {
    /// Create a new environment builder
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    /// Set artifacts root
    pub fn artifacts_root(mut self, root: impl Into<String>) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_ARTIFACTS"), root.into()));
        self
    }

    /// Set explicit run directory
    pub fn run_dir(mut self, dir: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_RUN_DIR"), dir.into()));
        self
    }

    /// Set TSV output path
    pub fn tsv_output(mut self, path: impl Into<String>) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_TSV_OUT"), path.into()));
        self
    }

    /// Set Markdown output path
    pub fn md_output(mut self, path: impl Into<String>) -> Self {
        self.vars.push((format!("{ENV_PREFIX}_MD_OUT"), path.into()));
        self
    }

    /// Set verbose
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.vars
            .push((format!("{ENV_PREFIX}_VERBOSE"), verbose.to_string()));
        self
    }

    /// Apply environment variables
    pub fn apply(self) {
        for (key, value) in self.vars {
            env::set_var(key, value);
        }
    }

    /// Apply and return guard that restores on drop
    pub fn apply_scoped(self) -> EnvGuard {
        let previous: Vec<_> = self
            .vars
            .iter()
            .map(|(k, _)| (k.clone(), env::var(k).ok()))
            .collect();

        self.apply();

        EnvGuard { previous }
    }
}

impl Default for EnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard that restores environment variables on drop
pub struct EnvGuard {
    previous: Vec<(String, Option<String>)>,
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.previous {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }
}

/// Print all BENCH_SUMMARY environment variables
pub fn print_env_help() {
    println!("Environment Variables:");
    println!();
    println!("  {ENV_PREFIX}_ARTIFACTS   Artifacts root directory");
    println!("  {ENV_PREFIX}_RUN_DIR     Explicit run directory (skips latest-run lookup)");
    println!("  {ENV_PREFIX}_TSV_OUT     TSV output path");
    println!("  {ENV_PREFIX}_MD_OUT      Markdown output path");
    println!("  {ENV_PREFIX}_VERBOSE     Enable verbose output (true/false)");
    println!();
    println!("Example:");
    println!("  export {ENV_PREFIX}_ARTIFACTS=./artifacts");
    println!("  export {ENV_PREFIX}_TSV_OUT=reports/summary.tsv");
    println!("  bench-summary summarize");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_config_default() {
        let config = EnvConfig::default();
        assert!(config.artifacts_root.is_none());
        assert!(config.run_dir.is_none());
        assert!(!config.has_any());
    }

    #[test]
    fn test_env_builder() {
        let _guard = EnvBuilder::new()
            .artifacts_root("/tmp/artifacts")
            .tsv_output("out.tsv")
            .apply_scoped();

        let config = EnvConfig::load();
        assert_eq!(config.artifacts_root, Some("/tmp/artifacts".to_string()));
        assert_eq!(config.tsv_output, Some("out.tsv".to_string()));
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = EnvBuilder::new().verbose(true).apply_scoped();

        let config = EnvConfig::load();
        assert_eq!(config.verbose, Some(true));
    }

    #[test]
    fn test_has_any() {
        let with_root = EnvConfig {
            artifacts_root: Some("x".to_string()),
            ..Default::default()
        };
        assert!(with_root.has_any());
    }
}
