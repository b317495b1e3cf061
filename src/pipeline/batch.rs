//! Run many independent (app, feature) units on a worker pool.

use super::unit::{run_unit, AppInput};
use crate::features::Feature;
use crate::table::ComparisonTable;
use crate::utils::error::PipelineError;
use log::{info, warn};
use rayon::prelude::*;

/// Result of one (app, feature) unit
#[derive(Debug)]
pub struct UnitOutcome {
    pub app: String,
    pub feature: Feature,
    pub result: Result<ComparisonTable, PipelineError>,
}

impl UnitOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Run every (feature, app) pair
///
/// Units share no mutable state, so they run in parallel on the current
/// rayon pool. A failed unit is reported in its outcome and does not stop
/// the others. Outcomes come back feature-major, apps in input order.
pub fn run_batch(features: &[Feature], apps: &[AppInput<'_>]) -> Vec<UnitOutcome> {
    let units: Vec<(Feature, &AppInput<'_>)> = features
        .iter()
        .flat_map(|&feature| apps.iter().map(move |app| (feature, app)))
        .collect();

    info!("Running {} units ({} features x {} apps)", units.len(), features.len(), apps.len());

    let outcomes: Vec<UnitOutcome> = units
        .into_par_iter()
        .map(|(feature, app)| {
            let result = run_unit(app, feature);
            if let Err(e) = &result {
                warn!("{} / {} failed: {}", app.app, feature, e);
            }
            UnitOutcome {
                app: app.app.to_string(),
                feature,
                result,
            }
        })
        .collect();

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    info!("{} of {} units succeeded", outcomes.len() - failed, outcomes.len());

    outcomes
}
