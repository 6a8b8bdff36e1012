//! Bottom-up conversion of a directory tree
//!
//! A directory is only renamed once everything below it has been converted,
//! so paths recorded for its children never go stale mid-walk.

use std::path::Path;

use colored::Colorize;
use log::{debug, error, info};

use crate::config::TransformationConfig;
use crate::logging::format_message;
use crate::transform::transform_name;

use super::entry::{EntryKind, FileSystemEntry, RenameOutcome};
use super::fs_ops::FileSystem;
use super::report::RunReport;

/// Applies the name transformation across a tree through a [`FileSystem`]
pub struct TraversalRenamer<'a, F: FileSystem> {
    config: &'a TransformationConfig,
    fs: &'a F,
}

impl<'a, F: FileSystem> TraversalRenamer<'a, F> {
    pub fn new(config: &'a TransformationConfig, fs: &'a F) -> Self {
        TraversalRenamer { config, fs }
    }

    /// Converts everything below `start`, then `start` itself if configured
    ///
    /// Per-entry failures are recorded in the report and never stop the walk.
    pub fn run(&self, start: &Path) -> RunReport {
        let mut report = RunReport::new();

        self.convert_directory(start, &mut report);

        if self.config.convert_start_directory() {
            info!("Converting start directory");
            let outcome = match FileSystemEntry::from_path(start, EntryKind::Directory) {
                Ok(entry) => self.rename_entry(&entry),
                Err(reason) => RenameOutcome::Failed {
                    path: start.to_path_buf(),
                    reason,
                },
            };
            report_outcome(&outcome);
            report.record(outcome);
        }

        report
    }

    fn convert_directory(&self, dir: &Path, report: &mut RunReport) {
        let children = match self.fs.read_children(dir) {
            Ok(children) => children,
            Err(reason) => {
                let outcome = RenameOutcome::Failed {
                    path: dir.to_path_buf(),
                    reason,
                };
                report_outcome(&outcome);
                report.record(outcome);
                return;
            }
        };

        let (directories, files): (Vec<FileSystemEntry>, Vec<FileSystemEntry>) =
            children.into_iter().partition(FileSystemEntry::is_directory);

        // Linked directories are renamed below but never entered.
        for directory in directories.iter().filter(|d| d.kind() == EntryKind::Directory) {
            self.convert_directory(&directory.path(), report);
        }

        report.increment_directories_visited();
        info!("Directory {}...", dir.display());
        if directories.is_empty() && (files.is_empty() || !self.config.include_files()) {
            info!("Empty");
            return;
        }

        for directory in &directories {
            let outcome = self.rename_entry(directory);
            report_outcome(&outcome);
            report.record(outcome);
        }

        if self.config.include_files() {
            for file in &files {
                let outcome = self.rename_entry(file);
                report_outcome(&outcome);
                report.record(outcome);
            }
        }
    }

    /// Converts the name of one entry and renames it when the name changed
    pub fn rename_entry(&self, entry: &FileSystemEntry) -> RenameOutcome {
        let old_path = entry.path();

        let new_name = match transform_name(entry.name(), self.config, entry.is_directory()) {
            Ok(name) => name,
            Err(reason) => {
                return RenameOutcome::Failed {
                    path: old_path,
                    reason,
                };
            }
        };

        let new_path = entry.sibling(&new_name);
        if new_path == old_path {
            return RenameOutcome::Unchanged(old_path);
        }

        match self.fs.rename(&old_path, &new_path) {
            Ok(()) => RenameOutcome::Renamed {
                from: old_path,
                to: new_path,
            },
            Err(reason) => RenameOutcome::Failed {
                path: old_path,
                reason,
            },
        }
    }
}

fn report_outcome(outcome: &RenameOutcome) {
    match outcome {
        RenameOutcome::Unchanged(path) => {
            debug!("No changes were made to {}", path.display());
        }
        RenameOutcome::Renamed { from, to } => {
            let target = to.display().to_string();
            let message = format!("Converting {} to {}", from.display(), target);
            let colored_message = format!("Converting {} to {}", from.display(), target.bold());
            info!("{}", format_message(&message, &colored_message));
        }
        RenameOutcome::Failed { path, reason } => {
            error!("Could not convert {}: {}", path.display(), reason);
        }
    }
}
