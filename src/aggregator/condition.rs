//! Reduce per-iteration series to one mean per condition.

use super::iteration::ConditionSeries;
use super::location::NetworkCondition;
use crate::features::Measurement;
use log::warn;
use serde::{Deserialize, Serialize};

/// Mean of a series plus how many undefined entries it skipped
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduction {
    pub mean: Measurement,
    pub skipped: usize,
}

/// Default and overlay means for one action
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregatedMeasurement {
    pub default: Measurement,
    pub overlay: Measurement,
}

/// Arithmetic mean of the defined entries
///
/// Undefined entries and NaN values are skipped and counted. With no
/// defined entry at all (including an empty slice) the mean is itself
/// undefined.
pub fn reduce(values: &[Measurement]) -> Reduction {
    let defined: Vec<f64> = values
        .iter()
        .filter_map(|m| m.value())
        .filter(|v| !v.is_nan())
        .collect();
    let skipped = values.len() - defined.len();

    let mean = if defined.is_empty() {
        Measurement::Undefined
    } else {
        Measurement::from_f64(defined.iter().sum::<f64>() / defined.len() as f64)
    };

    Reduction { mean, skipped }
}

/// Reduce both conditions of an action's series
///
/// **Public** - used by the pipeline once all iterations are collected
pub fn aggregate(action: &str, series: &ConditionSeries) -> AggregatedMeasurement {
    let [default, overlay] = NetworkCondition::ALL.map(|condition| {
        let reduction = reduce(series.values(condition));
        if reduction.skipped > 0 {
            warn!(
                "{}: skipped {} undefined {} value(s)",
                action, reduction.skipped, condition
            );
        }
        reduction.mean
    });

    AggregatedMeasurement { default, overlay }
}
