//! Assemble per-action means into one comparison table per app and feature.

use crate::aggregator::{ActionKey, AggregatedMeasurement, NetworkCondition};
use crate::features::{Feature, Measurement};
use crate::utils::error::TableError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One action's row: the default and overlay means
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub action: ActionKey,
    pub default: Measurement,
    pub overlay: Measurement,
}

impl TableRow {
    pub fn value(&self, condition: NetworkCondition) -> Measurement {
        match condition {
            NetworkCondition::Default => self.default,
            NetworkCondition::Overlay => self.overlay,
        }
    }
}

/// Rows = actions in discovery order, columns = the two conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub app: String,
    pub feature: Feature,

    /// `{app}_default` and `{app}_tor`
    pub columns: [String; 2],

    pub rows: Vec<TableRow>,
}

impl ComparisonTable {
    /// Row for an action label, if present
    pub fn row(&self, action: &str) -> Option<&TableRow> {
        self.rows.iter().find(|row| row.action.as_str() == action)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Column labels for an app, in condition order
pub fn column_labels(app: &str) -> [String; 2] {
    NetworkCondition::ALL.map(|condition| format!("{}_{}", app, condition.label()))
}

/// Build the comparison table for one app and feature
///
/// **Public** - final step of the pipeline
///
/// # Arguments
/// * `app` - App name, used for column labels
/// * `feature` - Feature the measurements belong to
/// * `measurements` - Aggregated pairs in discovery order
///
/// # Errors
/// * `TableError::EmptyActionSet` - The app has no actions
pub fn build_table(
    app: &str,
    feature: Feature,
    measurements: Vec<(ActionKey, AggregatedMeasurement)>,
) -> Result<ComparisonTable, TableError> {
    if measurements.is_empty() {
        return Err(TableError::EmptyActionSet(app.to_string()));
    }

    let mut seen = HashSet::new();
    for (action, _) in &measurements {
        if !seen.insert(action.as_str()) {
            warn!("{}: action label '{}' appears more than once", app, action);
        }
    }

    let rows: Vec<TableRow> = measurements
        .into_iter()
        .map(|(action, pair)| TableRow {
            action,
            default: pair.default,
            overlay: pair.overlay,
        })
        .collect();

    debug!("Built {} table for {} with {} rows", feature, app, rows.len());

    Ok(ComparisonTable {
        app: app.to_string(),
        feature,
        columns: column_labels(app),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(default: f64, overlay: f64) -> AggregatedMeasurement {
        AggregatedMeasurement {
            default: Measurement::Value(default),
            overlay: Measurement::Value(overlay),
        }
    }

    #[test]
    fn test_build_keeps_discovery_order() {
        let table = build_table(
            "Gmail",
            Feature::TotSize,
            vec![
                (ActionKey::from_script_name("Gmail_send"), pair(1.0, 2.0)),
                (ActionKey::from_script_name("Gmail_open_inbox"), pair(3.0, 4.0)),
            ],
        )
        .unwrap();

        assert_eq!(table.columns, ["Gmail_default".to_string(), "Gmail_tor".to_string()]);
        assert_eq!(table.rows[0].action.as_str(), "send");
        assert_eq!(table.rows[1].action.as_str(), "open_inbox");
        assert_eq!(
            table.row("open_inbox").unwrap().value(NetworkCondition::Overlay),
            Measurement::Value(4.0)
        );
    }

    #[test]
    fn test_empty_action_set() {
        let err = build_table("Gmail", Feature::TotSize, Vec::new()).unwrap_err();
        assert!(matches!(err, TableError::EmptyActionSet(app) if app == "Gmail"));
    }
}
