//! Name transformation module
//!
//! This module contains the pure pipeline that turns an entry name into its
//! converted form, together with the individual stages.

mod case;
mod pipeline;
mod punctuation;
mod separator;

pub use case::{cap_words, convert_case};
pub use pipeline::{remove_patterns, transform_name};
pub use punctuation::remove_punctuation;
pub use separator::{replace_separator, validate_separator};
