//! Scalar result of a feature computation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A feature value, or the explicit "no data" marker
///
/// Statistics over an empty packet subset yield [`Measurement::Undefined`]
/// instead of a NaN or a zero, so a chart can show a gap rather than a
/// misleading zero bar. Serializes as a JSON number or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Measurement {
    Value(f64),
    Undefined,
}

impl Measurement {
    /// Wrap a float, mapping NaN to `Undefined`
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            Measurement::Undefined
        } else {
            Measurement::Value(value)
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Measurement::Value(v) => Some(v),
            Measurement::Undefined => None,
        }
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, Measurement::Undefined)
    }
}

impl From<Option<f64>> for Measurement {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Measurement::Undefined, Measurement::from_f64)
    }
}

impl From<Measurement> for Option<f64> {
    fn from(m: Measurement) -> Self {
        m.value()
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Value(v) => write!(f, "{:.2}", v),
            Measurement::Undefined => write!(f, "n/a"),
        }
    }
}
