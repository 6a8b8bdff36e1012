//! Settings loading functionality
//!
//! This module contains functions for locating and reading settings files.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::debug;
use once_cell::sync::Lazy;
use shellexpand::tilde;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER, SETTINGS_FILE_NAME};
use crate::errors::{Result, config_parsing_error, file_operation_error};

use super::model::Settings;

static DEFAULT_SETTINGS_PATH: Lazy<Option<PathBuf>> = Lazy::new(|| {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|folder| folder.config_dir().join(SETTINGS_FILE_NAME))
});

/// Expands `~` and environment variables in a user supplied path
///
/// Unknown variables are left as written.
pub fn expand_path(path: &str) -> String {
    match shellexpand::full(path) {
        Ok(expanded) => expanded.to_string(),
        Err(_) => tilde(path).to_string(),
    }
}

/// Path of the per-user settings file, whether or not it exists
pub fn default_settings_path() -> Option<&'static Path> {
    DEFAULT_SETTINGS_PATH.as_deref()
}

/// Loads settings from a YAML file
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid settings YAML
pub fn load_settings(file: &Path) -> Result<Settings> {
    let content = fs::read_to_string(file)
        .map_err(|e| file_operation_error(e, file.to_path_buf(), "read settings file"))?;

    serde_yaml::from_str(&content).map_err(|e| {
        let detail = format!(
            "Failed to parse settings file {}: {}\nPlease check the YAML syntax.",
            file.display(),
            e
        );
        config_parsing_error(e, &detail)
    })
}

/// Resolves the base settings for a run
///
/// An explicit path must exist. Without one, the per-user settings file is
/// used when present and built-in defaults otherwise.
///
/// # Errors
/// Returns an error if an explicit settings file is missing or any settings
/// file fails to load
pub fn resolve_settings(explicit: Option<&str>) -> Result<Settings> {
    if let Some(path) = explicit {
        let path = PathBuf::from(expand_path(path));
        if !path.is_file() {
            return Err(config_parsing_error(
                std::io::Error::from(std::io::ErrorKind::NotFound),
                &format!("Settings file does not exist: {}", path.display()),
            ));
        }
        debug!("Loading settings from {}", path.display());
        return load_settings(&path);
    }

    match default_settings_path() {
        Some(path) if path.is_file() => {
            debug!("Loading settings from {}", path.display());
            load_settings(path)
        }
        _ => {
            debug!("No settings file found, using defaults");
            Ok(Settings::default())
        }
    }
}
