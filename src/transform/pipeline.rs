//! Name transformation pipeline
//!
//! The stages run in a fixed order: pattern removal, punctuation removal,
//! trimming, separator substitution and case conversion. Reordering them
//! changes the output.

use crate::config::{PunctuationMode, TransformationConfig};
use crate::errors::Result;

use super::case::convert_case;
use super::punctuation::remove_punctuation;
use super::separator::replace_separator;

/// Removes every match of every pattern, one pattern after another
pub fn remove_patterns(name: &str, config: &TransformationConfig) -> String {
    config
        .patterns()
        .iter()
        .fold(name.to_string(), |current, pattern| {
            pattern.replace_all(&current, "").into_owned()
        })
}

/// Computes the new name for an entry
///
/// Pure: no filesystem access, and the result depends only on the arguments.
/// An empty result is returned as is.
///
/// # Errors
/// Returns an illegal character error if the configured separator contains a
/// character the filesystem does not allow
pub fn transform_name(
    name: &str,
    config: &TransformationConfig,
    is_directory: bool,
) -> Result<String> {
    let stripped = remove_patterns(name, config);

    let punctuated = match config.remove_punctuation() {
        PunctuationMode::Off => stripped,
        PunctuationMode::SafeSubset | PunctuationMode::All => {
            remove_punctuation(&stripped, &config.effective_ignore(is_directory))
        }
    };

    let trimmed = punctuated.trim();

    let separated = match config.separator() {
        Some(separator) => replace_separator(trimmed, separator)?,
        None => trimmed.to_string(),
    };

    Ok(convert_case(&separated, config.case()))
}
