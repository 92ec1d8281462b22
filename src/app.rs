use crate::config::AppConfig;
use crate::error::OrganizeError;
use crate::fs_scan;
use crate::materialize::Materializer;
use crate::resolve::Resolver;
use crate::types::{FailedFile, MovedFile, RunSummary};

use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One pass over all input paths, in order, sharing a single collision table.
///
/// Fail-fast by default: the first walk/stat/mkdir/move error ends the run.
/// With `continue_on_error` per-file failures are collected in the summary
/// instead. Creating the output root is always fatal.
pub fn run(cfg: &AppConfig) -> Result<RunSummary> {
    debug!(
        input_paths = ?cfg.input_paths,
        output_path = %cfg.output_path.display(),
        verbose = cfg.verbose,
        dry_run = cfg.dry_run,
        continue_on_error = cfg.continue_on_error,
        "run config"
    );

    let materializer = Materializer::new(cfg.dry_run);
    materializer
        .ensure_directory(&cfg.output_path)
        .context("create output path")?;

    let mut resolver = Resolver::new(cfg.output_path.clone());
    let mut summary = RunSummary {
        dry_run: cfg.dry_run,
        ..RunSummary::default()
    };

    for input_path in &cfg.input_paths {
        info!("Processing input path {}...", input_path.display());

        // Snapshot trước khi move: file vừa move vào Output (nằm trong input) không bị quét lại
        let files = snapshot(input_path, cfg.continue_on_error, &mut summary)
            .with_context(|| format!("walk input path {}", input_path.display()))?;

        for file in files {
            match process_file(&file, &mut resolver, &materializer) {
                Ok(moved) => {
                    if moved.suffix > 1 {
                        summary.collisions += 1;
                    }
                    summary.processed += 1;
                    summary.moves.push(moved);
                }
                Err(e) if cfg.continue_on_error => {
                    warn!("{}", e);
                    summary.failures.push(failed(&e));
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    info!(
        "DONE: processed={}, collisions={}, failed={}, dry_run={}",
        summary.processed,
        summary.collisions,
        summary.failures.len(),
        summary.dry_run
    );

    Ok(summary)
}

/// Walk one input path to completion. In fail-fast mode the first walk error
/// is returned; otherwise it is recorded and the rest of the tree is kept.
fn snapshot(
    input_path: &Path,
    continue_on_error: bool,
    summary: &mut RunSummary,
) -> std::result::Result<Vec<PathBuf>, OrganizeError> {
    if !continue_on_error {
        return fs_scan::list_files(input_path);
    }

    let mut files = Vec::new();
    for entry in fs_scan::walk_files(input_path) {
        match entry {
            Ok(p) => files.push(p),
            Err(e) => {
                warn!("{}", e);
                summary.failures.push(failed(&e));
            }
        }
    }
    Ok(files)
}

fn process_file(
    file: &Path,
    resolver: &mut Resolver,
    materializer: &Materializer,
) -> std::result::Result<MovedFile, OrganizeError> {
    debug!("Processing file {}", file.display());

    let record = fs_scan::stat_file(file)?;
    let dest = resolver
        .resolve(&record.path, record.modified_at)
        .map_err(|source| OrganizeError::Timestamp {
            path: record.path.clone(),
            source,
        })?;

    materializer.ensure_directory(&dest.directory)?;

    let to = dest.path();
    materializer.move_file(&record.path, &to)?;

    Ok(MovedFile {
        from: record.path,
        to,
        suffix: dest.suffix,
    })
}

fn failed(e: &OrganizeError) -> FailedFile {
    FailedFile {
        path: e.path().to_path_buf(),
        error: e.to_string(),
    }
}

/// Print failures (if any) and turn them into the run's error.
pub fn report(summary: &RunSummary) -> Result<()> {
    if !summary.has_failures() {
        return Ok(());
    }

    println!(
        "DONE WITH ERRORS: processed={}, failed={}",
        summary.processed,
        summary.failures.len()
    );
    for f in &summary.failures {
        println!("  - {}\n    {}", f.path.display(), f.error);
    }

    Err(anyhow!(
        "Run finished with {} failed file(s).",
        summary.failures.len()
    ))
}
