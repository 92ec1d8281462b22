use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Move files into <outputPath>/<year>/ renamed by their modification time"
)]
pub struct Cli {
    /// Input directories (same as --inputPaths)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Input directories, walked recursively [default: current directory]
    #[arg(long = "inputPaths", value_name = "PATH", num_args = 1..)]
    pub input_paths: Vec<PathBuf>,

    /// Destination root [default: <cwd>/Output]
    #[arg(long = "outputPath", value_name = "PATH")]
    pub output_path: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,

    /// Log what would happen, create and move nothing
    #[arg(short, long = "dryRun")]
    pub dry_run: bool,

    /// Keep going after a failed file and report failures at the end
    #[arg(short = 'k', long = "continueOnError")]
    pub continue_on_error: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// `--inputPaths` values first, then positional ones.
    pub fn all_input_paths(&self) -> Vec<PathBuf> {
        self.input_paths
            .iter()
            .chain(self.paths.iter())
            .cloned()
            .collect()
    }
}
