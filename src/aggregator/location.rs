//! Network conditions, action keys and trace file resolution.

use crate::parser::{load_trace, TraceRecord};
use crate::utils::config::{OVERLAY_FILE_TOKEN, TRACE_EXTENSION};
use crate::utils::error::TraceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Network path a trace was captured under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkCondition {
    /// Direct network path
    Default,
    /// Anonymizing overlay network
    Overlay,
}

impl NetworkCondition {
    pub const ALL: [NetworkCondition; 2] = [NetworkCondition::Default, NetworkCondition::Overlay];

    /// Text inserted before the iteration number in trace file names
    pub fn file_suffix(self) -> String {
        match self {
            NetworkCondition::Default => String::new(),
            NetworkCondition::Overlay => format!("{}_", OVERLAY_FILE_TOKEN),
        }
    }

    /// Column label used in comparison tables
    pub fn label(self) -> &'static str {
        match self {
            NetworkCondition::Default => "default",
            NetworkCondition::Overlay => OVERLAY_FILE_TOKEN,
        }
    }
}

impl fmt::Display for NetworkCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Row label of an action: the script name without its app prefix
///
/// `Gmail_open_inbox` becomes `open_inbox`. A name without `_` is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionKey(String);

impl ActionKey {
    pub fn from_script_name(script: &str) -> Self {
        let label = script.split_once('_').map_or(script, |(_, rest)| rest);
        ActionKey(label.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One (action, iteration, condition) capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceLocation {
    /// Full script name, e.g. `Gmail_open_inbox`
    pub action: String,
    pub iteration: usize,
    pub condition: NetworkCondition,
}

impl TraceLocation {
    /// File name following `{action}_{condition-suffix}{iteration}.csv`
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}{}.{}",
            self.action,
            self.condition.file_suffix(),
            self.iteration,
            TRACE_EXTENSION
        )
    }
}

/// Every capture of one action, iteration by iteration, default first
pub fn trace_locations(action: &str, iterations: usize) -> Vec<TraceLocation> {
    (0..iterations)
        .flat_map(|iteration| {
            NetworkCondition::ALL.into_iter().map(move |condition| TraceLocation {
                action: action.to_string(),
                iteration,
                condition,
            })
        })
        .collect()
}

/// Something that can produce the trace for a location
///
/// The pipeline only talks to this trait, so tests can serve traces
/// from memory while the CLI reads them from disk.
pub trait TraceSource: Sync {
    fn load(&self, location: &TraceLocation) -> Result<TraceRecord, TraceError>;
}

/// Reads traces from one app's folder
#[derive(Debug, Clone)]
pub struct DirTraceSource {
    root: PathBuf,
}

impl DirTraceSource {
    /// `root` is the app's trace folder, e.g. `Traces/Gmail`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, location: &TraceLocation) -> PathBuf {
        self.root.join(location.file_name())
    }
}

impl TraceSource for DirTraceSource {
    fn load(&self, location: &TraceLocation) -> Result<TraceRecord, TraceError> {
        load_trace(self.path_for(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        let default = TraceLocation {
            action: "Gmail_open_inbox".to_string(),
            iteration: 3,
            condition: NetworkCondition::Default,
        };
        let overlay = TraceLocation {
            condition: NetworkCondition::Overlay,
            ..default.clone()
        };

        assert_eq!(default.file_name(), "Gmail_open_inbox_3.csv");
        assert_eq!(overlay.file_name(), "Gmail_open_inbox_tor_3.csv");
    }

    #[test]
    fn test_action_key_strips_app_prefix() {
        assert_eq!(ActionKey::from_script_name("Gmail_open_inbox").as_str(), "open_inbox");
        assert_eq!(ActionKey::from_script_name("login").as_str(), "login");
    }

    #[test]
    fn test_locations_interleave_conditions() {
        let locations = trace_locations("Dropbox_upload", 2);
        assert_eq!(locations.len(), 4);
        assert_eq!(locations[0].condition, NetworkCondition::Default);
        assert_eq!(locations[1].condition, NetworkCondition::Overlay);
        assert_eq!(locations[3].iteration, 1);
    }
}
