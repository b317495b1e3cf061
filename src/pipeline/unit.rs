//! One (app, feature) unit of work.

use crate::aggregator::{aggregate, collect, trace_locations, ActionKey, TraceSource};
use crate::features::Feature;
use crate::table::{build_table, ComparisonTable};
use crate::utils::error::PipelineError;
use log::debug;

/// Everything a unit needs to know about one app
pub struct AppInput<'a> {
    pub app: &'a str,

    /// Full script names, in discovery order
    pub actions: &'a [String],

    /// Address of the device the app ran on
    pub local_ip: &'a str,

    pub iterations: usize,

    pub source: &'a dyn TraceSource,
}

/// Compute the comparison table of one app for one feature
///
/// **Public** - main entry point for a unit of work
///
/// For each action, every iteration under both conditions is extracted
/// before the means are taken. The first failing trace aborts the unit.
///
/// # Errors
/// * `PipelineError::Table` - The app has no actions
/// * `PipelineError::Trace` - A trace is missing or malformed
pub fn run_unit(input: &AppInput<'_>, feature: Feature) -> Result<ComparisonTable, PipelineError> {
    debug!(
        "Running {} for {} ({} actions x {} iterations)",
        feature,
        input.app,
        input.actions.len(),
        input.iterations
    );

    let mut measurements = Vec::with_capacity(input.actions.len());

    for action in input.actions {
        let locations = trace_locations(action, input.iterations);
        let series = collect(feature, action, &locations, input.local_ip, input.source)?;
        measurements.push((ActionKey::from_script_name(action), aggregate(action, &series)));
    }

    Ok(build_table(input.app, feature, measurements)?)
}
