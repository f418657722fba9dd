use serde::{Serialize, Serializer};
use std::fmt;

/// A size ratio as a percentage, or `NotApplicable` when the reference size
/// is zero.
///
/// Serializes as a number or `null`, and displays as `"33.33%"` or `"N/A"`,
/// so neither `NaN` nor infinity ever reaches the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ratio {
    Percent(f64),
    NotApplicable,
}

impl Serialize for Ratio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Ratio::Percent(p) => serializer.serialize_f64(*p),
            Ratio::NotApplicable => serializer.serialize_none(),
        }
    }
}

impl Ratio {
    pub fn percent(&self) -> Option<f64> {
        match self {
            Ratio::Percent(p) => Some(*p),
            Ratio::NotApplicable => None,
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ratio::Percent(p) => write!(f, "{p:.2}%"),
            Ratio::NotApplicable => f.write_str("N/A"),
        }
    }
}

/// Percentage by which `produced` is smaller than `original`.
///
/// Negative when the encoded form is larger, which is common for text
/// without long runs.
pub fn compression_ratio(original: usize, produced: usize) -> Ratio {
    if original == 0 {
        return Ratio::NotApplicable;
    }
    Ratio::Percent(100.0 * (1.0 - produced as f64 / original as f64))
}

/// Percentage by which `decompressed` is larger than `compressed`.
pub fn expansion_ratio(compressed: usize, decompressed: usize) -> Ratio {
    if compressed == 0 {
        return Ratio::NotApplicable;
    }
    Ratio::Percent(100.0 * (decompressed as f64 / compressed as f64 - 1.0))
}
