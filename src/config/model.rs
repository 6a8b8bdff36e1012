//! Configuration data structures
//!
//! `Settings` is the loose, user-facing shape read from YAML and the command
//! line. `TransformationConfig` is the validated form handed to the pipeline.

use std::collections::BTreeSet;

use regex::Regex;
use serde::Deserialize;

use crate::constants::SAFE_PUNCTUATION;
use crate::errors::{Result, pattern_matching_error};
use crate::transform::validate_separator;

/// Case normalisation applied as the last pipeline stage
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    /// Leave the case untouched
    #[default]
    None,
    /// Lowercase everything
    Lower,
    /// Uppercase everything
    Upper,
    /// Capitalise the first letter of every whitespace delimited word
    #[serde(alias = "cap_words")]
    CapWords,
}

/// How much punctuation the pipeline removes
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PunctuationMode {
    /// Keep all punctuation
    #[default]
    Off,
    /// Remove punctuation except `.`, `-` and `_`
    #[serde(alias = "safe")]
    SafeSubset,
    /// Remove all punctuation, file name periods excepted
    All,
}

/// A literal `from` -> `to` substitution
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SeparatorPair {
    pub from: String,
    pub to: String,
}

impl SeparatorPair {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        SeparatorPair {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Conversion settings as read from a settings file or the command line
///
/// Every field is optional in YAML so a file only needs to mention what it
/// changes.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub case: CaseMode,
    pub patterns: Vec<String>,
    pub remove_punctuation: PunctuationMode,
    pub ignore: String,
    pub separator: Option<SeparatorPair>,
    pub include_files: bool,
    pub convert_start_directory: bool,
}

impl Settings {
    /// Validates the settings and builds the immutable pipeline configuration
    ///
    /// # Errors
    /// * Returns a pattern matching error for the first malformed removal pattern
    /// * Returns an illegal character error if the separator cannot appear in a path
    pub fn compile(&self) -> Result<TransformationConfig> {
        let patterns = self
            .patterns
            .iter()
            .map(|pattern| Regex::new(pattern).map_err(|e| pattern_matching_error(e, pattern)))
            .collect::<Result<Vec<Regex>>>()?;

        if let Some(separator) = &self.separator {
            validate_separator(separator)?;
        }

        Ok(TransformationConfig {
            case: self.case,
            patterns,
            remove_punctuation: self.remove_punctuation,
            ignore: self.ignore.chars().collect(),
            separator: self.separator.clone(),
            include_files: self.include_files,
            convert_start_directory: self.convert_start_directory,
        })
    }
}

/// Validated, read-only configuration shared by the transformer and the traversal
#[derive(Debug, Clone, Default)]
pub struct TransformationConfig {
    pub(crate) case: CaseMode,
    pub(crate) patterns: Vec<Regex>,
    pub(crate) remove_punctuation: PunctuationMode,
    pub(crate) ignore: BTreeSet<char>,
    pub(crate) separator: Option<SeparatorPair>,
    pub(crate) include_files: bool,
    pub(crate) convert_start_directory: bool,
}

impl TransformationConfig {
    pub fn case(&self) -> CaseMode {
        self.case
    }

    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    pub fn remove_punctuation(&self) -> PunctuationMode {
        self.remove_punctuation
    }

    pub fn separator(&self) -> Option<&SeparatorPair> {
        self.separator.as_ref()
    }

    pub fn include_files(&self) -> bool {
        self.include_files
    }

    pub fn convert_start_directory(&self) -> bool {
        self.convert_start_directory
    }

    /// Characters exempt from punctuation removal for one entry
    pub fn effective_ignore(&self, is_directory: bool) -> BTreeSet<char> {
        let mut ignore = self.ignore.clone();
        if self.remove_punctuation == PunctuationMode::SafeSubset {
            ignore.extend(SAFE_PUNCTUATION.chars());
        }
        if let Some(first) = self.separator.as_ref().and_then(|s| s.from.chars().next()) {
            ignore.insert(first);
        }
        if !is_directory {
            ignore.insert('.');
        }
        ignore
    }
}
