use crate::features::{extract, Feature, Measurement};
use crate::parser::load_trace;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Compute and print one feature of one trace
pub fn extract_single(trace_path: &Path, feature: &str, local_ip: &str) -> Result<Measurement> {
    let feature: Feature = feature.parse().map_err(anyhow::Error::msg)?;

    let trace = load_trace(trace_path)
        .with_context(|| format!("Failed to load trace {}", trace_path.display()))?;

    let value = extract(feature, &trace, local_ip);

    println!("Trace:   {} ({} packets)", trace_path.display(), trace.len());
    println!("Feature: {} [{}]", feature.title(), feature.unit());
    println!("Value:   {}", value);

    Ok(value)
}

/// List the available features
pub fn display_features() {
    println!("{:<18} {:<40} {}", "FEATURE", "TITLE", "UNIT");
    for feature in Feature::ALL {
        println!("{:<18} {:<40} {}", feature.key(), feature.title(), feature.unit());
    }
}

/// Display version information
pub fn display_version() {
    println!("Traffic Footprint v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Per-action traffic features under default and overlay networks.");
}
