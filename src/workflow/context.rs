//! Workflow context
//!
//! This module defines the options a run starts from and the state it
//! finishes with.

use std::path::PathBuf;

use crate::config::Settings;
use crate::listing::DirectoryListing;
use crate::traversal::RunReport;

/// Options for a run
#[derive(Debug, Clone)]
pub struct ProcessingOptions {
    /// Directory whose contents are converted
    pub start_dir: PathBuf,
    /// Conversion settings, validated before anything is touched
    pub settings: Settings,
    /// Only list the tree instead of converting it
    pub list_only: bool,
    /// Report renames without performing them
    pub dry_run: bool,
}

/// Result of a finished run
#[derive(Debug)]
pub struct WorkflowContext {
    /// The directory the run started from
    pub start_dir: PathBuf,
    /// Whether renames were only simulated
    pub dry_run: bool,
    /// Outcomes of a conversion run
    pub report: RunReport,
    /// Directory contents of a list-only run
    pub listings: Vec<DirectoryListing>,
}

impl WorkflowContext {
    /// Creates an empty context for a run starting at `start_dir`
    pub fn new(start_dir: PathBuf, dry_run: bool) -> Self {
        WorkflowContext {
            start_dir,
            dry_run,
            report: RunReport::new(),
            listings: Vec::new(),
        }
    }
}
