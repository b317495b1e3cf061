//! Aggregation of per-iteration feature values.
//!
//! This module turns the captures of one action into comparable numbers:
//! - Resolving (action, iteration, condition) to a trace
//! - Collecting one value per iteration and condition
//! - Reducing each condition to a mean

pub mod condition;
pub mod iteration;
pub mod location;

// Re-export main types and functions
pub use condition::{aggregate, reduce, AggregatedMeasurement, Reduction};
pub use iteration::{collect, ConditionSeries};
pub use location::{
    trace_locations, ActionKey, DirTraceSource, NetworkCondition, TraceLocation, TraceSource,
};
