//! Configuration module
//!
//! This module contains components for loading settings and validating them
//! into the configuration used by a conversion run.

mod loader;
mod model;

pub use loader::{default_settings_path, expand_path, load_settings, resolve_settings};
pub use model::{CaseMode, PunctuationMode, SeparatorPair, Settings, TransformationConfig};
