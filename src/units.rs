// Time units for measurement output
//
// The engine captures timings in fractional milliseconds from a monotonic
// clock; conversion to the configured unit happens once, at the output
// boundary, never during capture.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit applied to all numeric fields of a statistics record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Units {
    #[serde(rename = "ns")]
    Ns,
    #[default]
    #[serde(rename = "ms")]
    Ms,
    #[serde(rename = "s")]
    S,
}

impl Units {
    pub fn label(&self) -> &str {
        match self {
            Units::Ns => "ns",
            Units::Ms => "ms",
            Units::S => "s",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Convert a fractional-millisecond value to the target unit.
/// No rounding; full floating-point precision is preserved.
pub fn convert_from_millis(value: f64, to: Units) -> f64 {
    match to {
        Units::Ns => value * 1_000_000.0,
        Units::Ms => value,
        Units::S => value / 1000.0,
    }
}
