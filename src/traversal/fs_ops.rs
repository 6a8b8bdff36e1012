//! Filesystem primitives used by the traversal
//!
//! The walk only needs two things from the filesystem: the children of a
//! directory and an atomic rename. Both sit behind [`FileSystem`] so that runs
//! can be simulated and tests can record the calls that were made.

use std::fs;
use std::io;
use std::path::Path;

use log::info;

use crate::errors::{Result, file_operation_error, invalid_filename_error};

use super::entry::{EntryKind, FileSystemEntry};

/// Filesystem operations needed to convert a tree
pub trait FileSystem {
    /// Lists the immediate children of `dir`, sorted by name
    fn read_children(&self, dir: &Path) -> Result<Vec<FileSystemEntry>>;

    /// Renames `from` to `to` without ever replacing an existing entry
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;
}

/// The real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn read_children(&self, dir: &Path) -> Result<Vec<FileSystemEntry>> {
        let mut children = Vec::new();

        for entry in
            fs::read_dir(dir).map_err(|e| file_operation_error(e, dir.to_path_buf(), "read"))?
        {
            let entry = entry.map_err(|e| file_operation_error(e, dir.to_path_buf(), "read"))?;
            let path = entry.path();
            let file_type = entry
                .file_type()
                .map_err(|e| file_operation_error(e, path.clone(), "inspect"))?;
            let name = entry
                .file_name()
                .into_string()
                .map_err(|_| invalid_filename_error(path.clone()))?;

            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_symlink() && fs::metadata(&path).is_ok_and(|m| m.is_dir()) {
                EntryKind::LinkedDirectory
            } else {
                EntryKind::File
            };
            children.push(FileSystemEntry::new(dir, name, kind));
        }

        children.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(children)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        if to.symlink_metadata().is_ok() && !is_same_entry(from, to) {
            return Err(file_operation_error(
                io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} already exists", to.display()),
                ),
                from.to_path_buf(),
                "rename",
            ));
        }

        fs::rename(from, to).map_err(|e| file_operation_error(e, from.to_path_buf(), "rename"))
    }
}

/// Whether two paths name the same entry, as on case-insensitive filesystems
#[cfg(unix)]
fn is_same_entry(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (a.symlink_metadata(), b.symlink_metadata()) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

/// Whether two paths name the same entry, as on case-insensitive filesystems
#[cfg(not(unix))]
fn is_same_entry(a: &Path, b: &Path) -> bool {
    match (a.to_str(), b.to_str()) {
        (Some(a), Some(b)) => a != b && a.to_lowercase() == b.to_lowercase(),
        _ => false,
    }
}

/// Reads like the wrapped filesystem but only reports the renames it is asked for
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunFileSystem<F> {
    inner: F,
}

impl<F: FileSystem> DryRunFileSystem<F> {
    pub fn new(inner: F) -> Self {
        DryRunFileSystem { inner }
    }
}

impl<F: FileSystem> FileSystem for DryRunFileSystem<F> {
    fn read_children(&self, dir: &Path) -> Result<Vec<FileSystemEntry>> {
        self.inner.read_children(dir)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        info!("Would convert {} to {}", from.display(), to.display());
        Ok(())
    }
}
