use crate::cli::Cli;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "Output";

/// Resolved run settings. All paths are absolute.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input_paths: Vec<PathBuf>,
    pub output_path: PathBuf,
    pub verbose: bool,
    pub dry_run: bool,
    pub continue_on_error: bool,
}

impl AppConfig {
    /// Fill defaults from `cwd`: inputs = `[cwd]`, output = `<cwd>/Output`.
    /// Relative paths are taken relative to `cwd`.
    pub fn from_cli(cli: &Cli, cwd: &Path) -> Self {
        let mut input_paths: Vec<PathBuf> = cli
            .all_input_paths()
            .into_iter()
            .map(|p| cwd.join(p))
            .collect();
        if input_paths.is_empty() {
            input_paths.push(cwd.to_path_buf());
        }

        let output_path = cli
            .output_path
            .as_ref()
            .map(|p| cwd.join(p))
            .unwrap_or_else(|| cwd.join(DEFAULT_OUTPUT_DIR));

        Self {
            input_paths,
            output_path,
            verbose: cli.verbose,
            dry_run: cli.dry_run,
            continue_on_error: cli.continue_on_error,
        }
    }
}
