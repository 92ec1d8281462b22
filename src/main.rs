use anyhow::Context;
use clap::Parser;
use mtime_sort::{AppConfig, app, cli::Cli};
use tracing_subscriber::EnvFilter;

// usage:
// mtime_sort --dryRun --verbose --inputPaths /data/inbox --outputPath /data/sorted

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("mtime_sort=debug")
    } else {
        EnvFilter::new("mtime_sort=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let cwd = std::env::current_dir().context("read current directory")?;
    let cfg = AppConfig::from_cli(&cli, &cwd);

    let summary = app::run(&cfg)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    app::report(&summary)
}
