//! Converts file and directory names below a starting directory.
//!
//! Names are passed through a fixed pipeline (pattern removal, punctuation
//! removal, trimming, separator substitution, case conversion) and the tree is
//! renamed bottom-up so that no path is invalidated while it is still needed.

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod listing;
pub mod logging;
pub mod transform;
pub mod traversal;
pub mod workflow;

pub mod prelude {
    pub use crate::config::{
        CaseMode, PunctuationMode, SeparatorPair, Settings, TransformationConfig,
    };
    pub use crate::errors::{
        config_parsing_error, directory_not_found_error, file_operation_error,
        illegal_character_error, invalid_filename_error, path_operation_error,
        pattern_matching_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{Verbosity, format_message, init_logger};
    pub use crate::transform::transform_name;
    pub use crate::traversal::{
        FileSystem, LocalFileSystem, RenameOutcome, RunReport, TraversalRenamer,
    };
    pub use crate::workflow::{ProcessingOptions, process_tree};
}
