//! Display units for values shown in prompts. Model values stay in feet.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::MM_PER_FOOT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    /// Metric projects.
    #[default]
    Millimeters,
    /// Imperial projects; values are shown as decimal feet.
    Feet,
}

impl DisplayUnit {
    /// Convert an internal length (feet) to this unit.
    #[must_use]
    pub fn from_internal(self, feet: f64) -> f64 {
        match self {
            Self::Millimeters => feet * MM_PER_FOOT,
            Self::Feet => feet,
        }
    }

    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Feet => "ft",
        }
    }

    /// Format an internal length with `decimals` fraction digits, e.g. `610mm`.
    #[must_use]
    pub fn format(self, feet: f64, decimals: usize) -> String {
        format!("{:.decimals$}{}", self.from_internal(feet), self.suffix())
    }
}

impl FromStr for DisplayUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mm" | "millimeters" | "metric" => Ok(Self::Millimeters),
            "ft" | "feet" | "imperial" => Ok(Self::Feet),
            other => Err(format!("unknown display unit '{other}' (expected 'mm' or 'ft')")),
        }
    }
}
