//! Entries visited during a walk and the outcome of renaming them

use std::path::{Path, PathBuf};

use crate::errors::{Error, Result, invalid_filename_error, path_operation_error};

/// Kind of a filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    /// Symbolic link to a directory; renamed like one but never entered
    LinkedDirectory,
    File,
}

/// A single file or directory encountered during traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSystemEntry {
    parent: PathBuf,
    name: String,
    kind: EntryKind,
}

impl FileSystemEntry {
    pub fn new(parent: impl Into<PathBuf>, name: impl Into<String>, kind: EntryKind) -> Self {
        FileSystemEntry {
            parent: parent.into(),
            name: name.into(),
            kind,
        }
    }

    /// Splits a full path into its parent directory and name
    ///
    /// # Errors
    /// * Returns a path operation error if the path has no final component (`/`, `..`)
    /// * Returns an invalid filename error if the name is not valid Unicode
    pub fn from_path(path: &Path, kind: EntryKind) -> Result<Self> {
        let name = path
            .file_name()
            .ok_or_else(|| path_operation_error(path.to_path_buf(), "get name of"))?
            .to_str()
            .ok_or_else(|| invalid_filename_error(path.to_path_buf()))?;
        let parent = path.parent().unwrap_or_else(|| Path::new(""));

        Ok(FileSystemEntry::new(parent, name, kind))
    }

    pub fn parent(&self) -> &Path {
        &self.parent
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Whether the entry is converted with directory rules
    pub fn is_directory(&self) -> bool {
        matches!(self.kind, EntryKind::Directory | EntryKind::LinkedDirectory)
    }

    /// Full path of the entry
    pub fn path(&self) -> PathBuf {
        self.parent.join(&self.name)
    }

    /// Path the entry would have under a new name in the same parent
    pub fn sibling(&self, name: &str) -> PathBuf {
        self.parent.join(name)
    }
}

/// Result of attempting to convert one entry
#[derive(Debug)]
pub enum RenameOutcome {
    /// The converted name equals the current one; nothing was touched
    Unchanged(PathBuf),
    /// The entry was renamed
    Renamed { from: PathBuf, to: PathBuf },
    /// The entry could not be converted; its subtree was left alone
    Failed { path: PathBuf, reason: Error },
}

impl RenameOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, RenameOutcome::Failed { .. })
    }
}
