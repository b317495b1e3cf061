//! Comparison tables handed to chart renderers.

pub mod builder;

pub use builder::{build_table, column_labels, ComparisonTable, TableRow};
