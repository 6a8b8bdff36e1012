//! Workflow engine
//!
//! This module contains the engine that orchestrates a run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, info, warn};

use crate::constants::{EXIT_CONFIGURATION_ERROR, EXIT_RUNTIME_ERROR};
use crate::errors::{Error, directory_not_found_error, file_operation_error};
use crate::listing::{list_contents, render_listing};
use crate::traversal::{DryRunFileSystem, LocalFileSystem, RenameOutcome, TraversalRenamer};

use super::context::{ProcessingOptions, WorkflowContext};

/// Runs a conversion or listing based on the options
///
/// This function orchestrates the steps:
/// 1. Check the starting directory
/// 2. For a list-only run, print the tree and stop
/// 3. Validate the settings into an immutable configuration
/// 4. Convert the tree bottom-up
///
/// Configuration problems are returned before any entry is touched. Failures
/// of individual entries end up in the report instead.
///
/// # Errors
/// * Returns an error if the starting directory does not exist
/// * Returns an error if a list-only run cannot read the starting directory
/// * Returns an error if a removal pattern or the separator is invalid
pub fn process_tree(options: ProcessingOptions) -> Result<WorkflowContext> {
    let start_dir = prepare_start_directory(&options.start_dir)?;
    let mut context = WorkflowContext::new(start_dir.clone(), options.dry_run);

    // Listing never transforms a name, so the settings are not validated.
    if options.list_only {
        context.listings = list_contents(&LocalFileSystem, &start_dir)?;
        print!(
            "{}",
            render_listing(&start_dir, &context.listings, options.settings.include_files)
        );
        return Ok(context);
    }

    let config = options.settings.compile()?;
    debug!("Using configuration: {config:?}");

    info!(
        "Beginning conversion{}...",
        if options.dry_run { " (dry run)" } else { "" }
    );
    info!("Starting directory is: {}", start_dir.display());

    context.report = if options.dry_run {
        let fs = DryRunFileSystem::new(LocalFileSystem);
        TraversalRenamer::new(&config, &fs).run(&start_dir)
    } else {
        TraversalRenamer::new(&config, &LocalFileSystem).run(&start_dir)
    };

    let stats = context.report.stats();
    info!(
        "Finished: {} {}, {} unchanged, {} failed",
        stats.renamed,
        if options.dry_run { "to convert" } else { "converted" },
        stats.unchanged,
        stats.failed
    );
    if context.report.has_failures() {
        warn!("Some entries could not be converted:");
        for outcome in context.report.failures() {
            if let RenameOutcome::Failed { path, .. } = outcome {
                warn!("  {}", path.display());
            }
        }
    }

    Ok(context)
}

/// Exit status for an error that stopped a run
///
/// Fatal errors (bad settings, patterns, separators or start directory) are
/// told apart from failures that happened while the run was under way.
pub fn exit_status(error: &anyhow::Error) -> u8 {
    match error.downcast_ref::<Error>() {
        Some(error) if error.is_fatal() => EXIT_CONFIGURATION_ERROR,
        _ => EXIT_RUNTIME_ERROR,
    }
}

/// Checks the starting directory and gives it a final name component
///
/// Trailing separators are dropped. Paths such as `.` or `..` are resolved so
/// the start directory can be renamed too.
fn prepare_start_directory(start_dir: &Path) -> Result<PathBuf> {
    if !start_dir.is_dir() {
        return Err(directory_not_found_error(start_dir.to_path_buf()).into());
    }

    let start_dir: PathBuf = start_dir.components().collect();
    if start_dir.file_name().is_some() {
        return Ok(start_dir);
    }

    let resolved = fs::canonicalize(&start_dir)
        .map_err(|e| file_operation_error(e, start_dir.clone(), "resolve"))?;
    Ok(resolved)
}
