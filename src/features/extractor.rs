//! Per-trace feature extraction.
//!
//! Every feature maps to a (statistic, direction) pair; `extract` selects
//! the packet subset for the direction and hands it to the statistic.
//! All functions here are pure.

use super::feature::{Direction, Feature, Statistic};
use super::measurement::Measurement;
use crate::parser::{PacketRow, TraceRecord};
use std::collections::HashMap;

/// Compute one feature over one trace
///
/// **Public** - main entry point for feature extraction
///
/// # Arguments
/// * `feature` - Feature to compute
/// * `trace` - Parsed capture trace
/// * `local_ip` - Address of the device under test, decides direction
///
/// # Returns
/// The scalar value, or `Measurement::Undefined` when a mean or sum runs
/// over an empty packet subset. Counts over an empty subset are `0`.
pub fn extract(feature: Feature, trace: &TraceRecord, local_ip: &str) -> Measurement {
    let subset = select(trace, feature.direction(), local_ip);

    match feature.statistic() {
        Statistic::MeanSize => mean_frame_len(&subset),
        Statistic::TotalSize => total_frame_len(&subset),
        Statistic::Count => Measurement::Value(subset.len() as f64),
        Statistic::UniqueSizes => Measurement::Value(unique_size_count(trace) as f64),
        Statistic::Duration => action_duration(trace),
    }
}

/// Rows of `trace` matching `direction` relative to `local_ip`
pub fn select<'a>(
    trace: &'a TraceRecord,
    direction: Direction,
    local_ip: &str,
) -> Vec<&'a PacketRow> {
    trace
        .rows
        .iter()
        .filter(|row| match direction {
            Direction::Incoming => row.ip_dst == local_ip,
            Direction::Outgoing => row.ip_src == local_ip,
            Direction::All => true,
        })
        .collect()
}

/// Mean frame length; undefined for an empty subset
pub fn mean_frame_len(rows: &[&PacketRow]) -> Measurement {
    match total_frame_len(rows) {
        Measurement::Value(sum) => Measurement::Value(sum / rows.len() as f64),
        Measurement::Undefined => Measurement::Undefined,
    }
}

/// Sum of frame lengths; undefined for an empty subset
pub fn total_frame_len(rows: &[&PacketRow]) -> Measurement {
    if rows.is_empty() {
        return Measurement::Undefined;
    }

    // Lengths are unbounded u64 cells, so sum as f64
    let sum: f64 = rows.iter().map(|row| row.frame_len as f64).sum();
    Measurement::Value(sum)
}

/// Number of distinct frame lengths that occur exactly once in the trace
///
/// Always counts over the whole trace, whatever the local address.
pub fn unique_size_count(trace: &TraceRecord) -> usize {
    let mut occurrences: HashMap<u64, usize> = HashMap::new();
    for row in &trace.rows {
        *occurrences.entry(row.frame_len).or_insert(0) += 1;
    }

    occurrences.values().filter(|&&count| count == 1).count()
}

/// Time between the first and the last row, in file order; `0` when empty
pub fn action_duration(trace: &TraceRecord) -> Measurement {
    match (trace.rows.first(), trace.rows.last()) {
        (Some(first), Some(last)) => Measurement::from_f64(last.time - first.time),
        _ => Measurement::Value(0.0),
    }
}
