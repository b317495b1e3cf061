//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod compare;
pub mod discovery;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use compare::{execute_compare, validate_args};
pub use models::{CompareArgs, CompareSummary};
pub use utils::{display_features, display_version, extract_single};
