//! Workflow module
//!
//! This module contains components for orchestrating a run.

mod context;
mod engine;

pub use context::{ProcessingOptions, WorkflowContext};
pub use engine::{exit_status, process_tree};
