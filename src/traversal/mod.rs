//! Tree traversal module
//!
//! This module contains the bottom-up walk that renames entries, the
//! filesystem primitives it relies on and the report it produces.

mod entry;
mod fs_ops;
mod renamer;
mod report;

pub use entry::{EntryKind, FileSystemEntry, RenameOutcome};
pub use fs_ops::{DryRunFileSystem, FileSystem, LocalFileSystem};
pub use renamer::TraversalRenamer;
pub use report::{RunReport, RunStats};
