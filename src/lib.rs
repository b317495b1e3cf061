//! Traffic Footprint
//!
//! Turns per-action network capture traces into scalar features and
//! builds per-app tables comparing each action under the default network
//! path and under an anonymizing overlay network.
//!
//! This crate provides the core implementation for the
//! `traffic-footprint` CLI tool.
//!
//! ## Pipeline
//!
//! For one app and one feature:
//! 1. `parser` loads each trace (one per action, iteration and condition)
//! 2. `features` extracts one scalar per trace
//! 3. `aggregator` collects the scalars and reduces them to means
//! 4. `table` assembles the means into a comparison table
//!
//! `pipeline` runs many (app, feature) units in parallel and `output`
//! writes the resulting tables as per-feature JSON reports.

pub mod aggregator;
pub mod commands;
pub mod features;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod table;
pub mod utils;
