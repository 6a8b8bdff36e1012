//! Directory listing used by list-only runs
//!
//! Walks the tree top-down and reports the directories (and optionally the
//! files) found at every level without renaming anything.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use log::warn;

use crate::errors::Result;
use crate::traversal::{EntryKind, FileSystem, FileSystemEntry};

/// Contents of one directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    pub path: PathBuf,
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

/// Lists `start` and every directory below it, parents before children
///
/// # Errors
/// Returns an error if `start` itself cannot be read. Unreadable
/// subdirectories are logged and skipped.
pub fn list_contents<F: FileSystem>(fs: &F, start: &Path) -> Result<Vec<DirectoryListing>> {
    let mut listings = Vec::new();
    let children = fs.read_children(start)?;
    collect(fs, start, children, &mut listings);
    Ok(listings)
}

fn collect<F: FileSystem>(
    fs: &F,
    dir: &Path,
    children: Vec<FileSystemEntry>,
    listings: &mut Vec<DirectoryListing>,
) {
    let (directories, files): (Vec<FileSystemEntry>, Vec<FileSystemEntry>) =
        children.into_iter().partition(FileSystemEntry::is_directory);

    listings.push(DirectoryListing {
        path: dir.to_path_buf(),
        directories: directories.iter().map(|d| d.name().to_string()).collect(),
        files: files.iter().map(|f| f.name().to_string()).collect(),
    });

    for directory in directories.iter().filter(|d| d.kind() == EntryKind::Directory) {
        let path = directory.path();
        match fs.read_children(&path) {
            Ok(children) => collect(fs, &path, children, listings),
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }
}

/// Renders listings as the text printed by list-only runs
pub fn render_listing(start: &Path, listings: &[DirectoryListing], show_files: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Directory listing for {}", start.display());

    for listing in listings {
        let _ = writeln!(out, "{} contains...", listing.path.display());
        let _ = writeln!(out, "Directories: {}", join_or_none(&listing.directories));
        if show_files {
            let _ = writeln!(out, "Files: {}", join_or_none(&listing.files));
        }
    }

    out
}

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "None".to_string()
    } else {
        names.join(", ")
    }
}
