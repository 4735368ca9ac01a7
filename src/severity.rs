//! Emission severity bands and their display colors.

use std::fmt;

use serde::Serialize;

/// Emissions below this many kg are [`Severity::Low`].
pub const MODERATE_THRESHOLD_KG: f64 = 10.0;

/// Emissions at or above this many kg are [`Severity::High`].
pub const HIGH_THRESHOLD_KG: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    /// Band for an emission value in kg.
    #[must_use]
    pub fn classify(emission_kg: f64) -> Self {
        if emission_kg < MODERATE_THRESHOLD_KG {
            Self::Low
        } else if emission_kg < HIGH_THRESHOLD_KG {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Hex fill color for bars in this band.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "#4CAF50",
            Self::Moderate => "#FFC107",
            Self::High => "#F44336",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Moderate => write!(f, "moderate"),
            Self::High => write!(f, "high"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(Severity::classify(9.999), Severity::Low);
        assert_eq!(Severity::classify(10.0), Severity::Moderate);
        assert_eq!(Severity::classify(49.999), Severity::Moderate);
        assert_eq!(Severity::classify(50.0), Severity::High);
    }

    #[test]
    fn zero_is_low() {
        assert_eq!(Severity::classify(0.0), Severity::Low);
    }

    #[test]
    fn large_values_are_high() {
        assert_eq!(Severity::classify(1e9), Severity::High);
    }

    #[test]
    fn each_band_has_distinct_color() {
        assert_eq!(Severity::Low.color(), "#4CAF50");
        assert_eq!(Severity::Moderate.color(), "#FFC107");
        assert_eq!(Severity::High.color(), "#F44336");
    }

    #[test]
    fn display_names() {
        assert_eq!(Severity::Moderate.to_string(), "moderate");
    }
}
