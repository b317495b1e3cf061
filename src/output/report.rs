//! Feature report schema written to disk.
//!
//! One report per feature gathers every app's table, which is what a
//! chart renderer needs to draw the apps side by side. Schema is
//! versioned to allow future evolution.

use crate::features::Feature;
use crate::pipeline::UnitOutcome;
use crate::table::ComparisonTable;
use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureReport {
    /// Schema version for compatibility checking
    pub version: String,

    pub feature: Feature,

    /// Chart title
    pub title: String,

    /// Y-axis label
    pub unit: String,

    /// One table per app that completed
    pub tables: Vec<ComparisonTable>,

    /// Apps whose unit failed, with the reason
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<UnitFailure>,

    /// Timestamp when report was generated
    pub generated_at: String,
}

/// An app that produced no table for this feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitFailure {
    pub app: String,
    pub error: String,
}

impl FeatureReport {
    pub fn new(feature: Feature) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            feature,
            title: feature.title().to_string(),
            unit: feature.unit().to_string(),
            tables: Vec::new(),
            failures: Vec::new(),
            generated_at: Utc::now().to_rfc3339(),
        }
    }

    /// File name for this report, e.g. `avginpack.json`
    pub fn file_name(&self) -> String {
        format!("{}.json", self.feature.file_stem())
    }
}

/// Group batch outcomes into one report per feature
///
/// Reports follow the order of `features`; tables and failures keep the
/// order in which the outcomes arrived.
pub fn group_by_feature(features: &[Feature], outcomes: Vec<UnitOutcome>) -> Vec<FeatureReport> {
    let mut reports: Vec<FeatureReport> = features.iter().map(|&f| FeatureReport::new(f)).collect();

    for outcome in outcomes {
        let Some(report) = reports.iter_mut().find(|r| r.feature == outcome.feature) else {
            continue;
        };

        match outcome.result {
            Ok(table) => report.tables.push(table),
            Err(e) => report.failures.push(UnitFailure {
                app: outcome.app,
                error: e.to_string(),
            }),
        }
    }

    reports
}
