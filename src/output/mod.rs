//! Output writers for feature reports.
//!
//! This module handles:
//! - The versioned per-feature report schema
//! - JSON report files
//! - Text summaries of comparison tables

pub mod json;
pub mod report;
pub mod text;

// Re-export main functions
pub use json::{read_report, write_report};
pub use report::{group_by_feature, FeatureReport, UnitFailure};
pub use text::render_table;

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
