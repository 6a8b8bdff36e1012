use regex::Error as RegexError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the dirconv application
#[derive(Debug)]
pub enum Error {
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// A removal pattern that is not a valid regular expression
    PatternMatching { source: RegexError, pattern: String },
    /// A separator containing a character the filesystem does not allow
    IllegalCharacter { character: char, separator: String },
    /// Error related to path operations
    PathOperation { path: PathBuf, operation: String },
    /// Error related to configuration parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Error when a directory is not found
    DirectoryNotFound { path: PathBuf },
}

impl Error {
    /// Whether the error must abort the whole run rather than a single entry
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::PatternMatching { .. }
                | Error::IllegalCharacter { .. }
                | Error::ConfigParsing { .. }
                | Error::DirectoryNotFound { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOperation {
                source,
                path,
                operation,
            } => {
                write!(f, "Failed to {} {}: {}", operation, path.display(), source)
            }
            Error::PatternMatching { pattern, source } => {
                write!(f, "Invalid pattern '{pattern}': {source}")
            }
            Error::IllegalCharacter {
                character,
                separator,
            } => {
                write!(
                    f,
                    "Character {character:?} in separator '{separator}' is not allowed in {} filesystem objects",
                    std::env::consts::FAMILY
                )
            }
            Error::PathOperation { path, operation } => {
                write!(f, "Failed to {} path: {}", operation, path.display())
            }
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Configuration parsing error: {detail}")
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::DirectoryNotFound { path } => {
                write!(f, "Directory not found: {}", path.display())
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::PatternMatching { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Custom Result type for the dirconv application
///
/// # Examples
/// ```
/// use std::path::Path;
/// use dirconv::prelude::{Result, directory_not_found_error};
///
/// fn check_start(dir: &Path) -> Result<()> {
///     if !dir.is_dir() {
///         return Err(directory_not_found_error(dir.to_path_buf()));
///     }
///     Ok(())
/// }
/// # assert!(check_start(Path::new("/definitely/not/here")).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a pattern matching error
pub fn pattern_matching_error(err: RegexError, pattern: &str) -> Error {
    Error::PatternMatching {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create an illegal character error
pub fn illegal_character_error(character: char, separator: &str) -> Error {
    Error::IllegalCharacter {
        character,
        separator: separator.to_string(),
    }
}

/// Helper function to create a path operation error
pub fn path_operation_error(path: PathBuf, operation: &str) -> Error {
    Error::PathOperation {
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a directory not found error
pub fn directory_not_found_error(path: PathBuf) -> Error {
    Error::DirectoryNotFound { path }
}
