//! Trace parsing and the packet row model.
//!
//! This module handles:
//! - Reading tab-separated capture exports
//! - Normalizing dotted column names
//! - Validating that required columns exist

pub mod schema;
pub mod trace;

// Re-export main types
pub use schema::{PacketRow, TraceRecord};
pub use trace::{load_trace, normalize_column_name, parse_trace};
