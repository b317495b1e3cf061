//! Feature definitions and per-trace extraction.
//!
//! This module turns one parsed trace into one scalar:
//! - `feature` names the eleven statistics and their chart metadata
//! - `extractor` computes them with direction filtering
//! - `measurement` carries the value or an explicit "undefined"

pub mod extractor;
pub mod feature;
pub mod measurement;

// Re-export main types and functions
pub use extractor::extract;
pub use feature::{Direction, Feature, Statistic};
pub use measurement::Measurement;
