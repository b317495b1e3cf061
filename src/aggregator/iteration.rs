//! Collect per-iteration feature values for one action.

use super::location::{NetworkCondition, TraceLocation, TraceSource};
use crate::features::{extract, Feature, Measurement};
use crate::utils::error::TraceError;
use log::debug;

/// Feature values of one action, split by condition, in iteration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionSeries {
    pub default: Vec<Measurement>,
    pub overlay: Vec<Measurement>,
}

impl ConditionSeries {
    pub fn push(&mut self, condition: NetworkCondition, value: Measurement) {
        match condition {
            NetworkCondition::Default => self.default.push(value),
            NetworkCondition::Overlay => self.overlay.push(value),
        }
    }

    pub fn values(&self, condition: NetworkCondition) -> &[Measurement] {
        match condition {
            NetworkCondition::Default => &self.default,
            NetworkCondition::Overlay => &self.overlay,
        }
    }
}

/// Extract `feature` from every trace of an action
///
/// **Public** - main entry point for iteration collection
///
/// # Arguments
/// * `feature` - Feature to extract
/// * `action` - Full script name of the action (for logging)
/// * `locations` - Captures to read, usually from `trace_locations`
/// * `local_ip` - Address of the device under test
/// * `source` - Where traces are loaded from
///
/// # Errors
/// The first `TraceError` aborts collection. A missing capture is never
/// skipped, since dropping it would bias the mean.
pub fn collect(
    feature: Feature,
    action: &str,
    locations: &[TraceLocation],
    local_ip: &str,
    source: &dyn TraceSource,
) -> Result<ConditionSeries, TraceError> {
    let mut series = ConditionSeries::default();

    for location in locations {
        let trace = source.load(location)?;
        let value = extract(feature, &trace, local_ip);
        series.push(location.condition, value);
    }

    debug!(
        "{} / {}: {} default, {} overlay values",
        action,
        feature,
        series.default.len(),
        series.overlay.len()
    );

    Ok(series)
}
