//! Emission factors and equivalence constants.

use serde::Serialize;

use crate::error::{Co2Error, Result};
use crate::transport::TransportMode;

/// Default kg CO₂ per km for each mode, in enumeration order.
pub const DEFAULT_EMISSION_RATES: [(TransportMode, f64); 4] = [
    (TransportMode::Car, 0.12),
    (TransportMode::Plane, 0.25),
    (TransportMode::Train, 0.04),
    (TransportMode::Bus, 0.06),
];

/// kg CO₂ emitted per hour of video streaming.
pub const DEFAULT_STREAMING_KG_PER_HOUR: f64 = 0.036;

/// kg CO₂ absorbed by one tree in one year.
pub const DEFAULT_TREE_ABSORPTION_KG_PER_YEAR: f64 = 22.0;

fn check_positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Co2Error::Config(format!(
            "{name} must be a finite positive number, got {value}"
        )))
    }
}

/// Emission rate per transport mode, kg CO₂ per km.
///
/// Always holds exactly one positive rate for every [`TransportMode`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionRates {
    rates: [f64; TransportMode::ALL.len()],
}

impl Default for EmissionRates {
    fn default() -> Self {
        let mut rates = [0.0; TransportMode::ALL.len()];
        for (mode, rate) in DEFAULT_EMISSION_RATES {
            rates[mode as usize] = rate;
        }
        Self { rates }
    }
}

impl EmissionRates {
    /// Build a table from `(mode, rate)` pairs.
    ///
    /// Later pairs for the same mode win.
    ///
    /// # Errors
    /// Returns [`Co2Error::MissingRate`] if a mode has no rate, or
    /// [`Co2Error::Config`] if a rate is not finite and positive.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (TransportMode, f64)>) -> Result<Self> {
        let mut slots: [Option<f64>; TransportMode::ALL.len()] = [None; TransportMode::ALL.len()];
        for (mode, rate) in pairs {
            slots[mode as usize] = Some(check_positive(&format!("rate for {mode}"), rate)?);
        }

        let mut rates = [0.0; TransportMode::ALL.len()];
        for mode in TransportMode::ALL {
            rates[mode as usize] =
                slots[mode as usize].ok_or_else(|| Co2Error::MissingRate(mode.id().to_string()))?;
        }
        Ok(Self { rates })
    }

    #[must_use]
    pub const fn rate(&self, mode: TransportMode) -> f64 {
        self.rates[mode as usize]
    }

    /// Iterate `(mode, rate)` in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (TransportMode, f64)> + '_ {
        TransportMode::ALL.into_iter().map(|mode| (mode, self.rate(mode)))
    }
}

/// Constants used to translate an emission into relatable units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EquivalenceRates {
    pub streaming_kg_per_hour: f64,
    pub tree_absorption_kg_per_year: f64,
}

impl Default for EquivalenceRates {
    fn default() -> Self {
        Self {
            streaming_kg_per_hour: DEFAULT_STREAMING_KG_PER_HOUR,
            tree_absorption_kg_per_year: DEFAULT_TREE_ABSORPTION_KG_PER_YEAR,
        }
    }
}

impl EquivalenceRates {
    /// # Errors
    /// Returns [`Co2Error::Config`] if either constant is not finite and positive.
    pub fn new(streaming_kg_per_hour: f64, tree_absorption_kg_per_year: f64) -> Result<Self> {
        Ok(Self {
            streaming_kg_per_hour: check_positive("streaming_kg_per_hour", streaming_kg_per_hour)?,
            tree_absorption_kg_per_year: check_positive(
                "tree_absorption_kg_per_year",
                tree_absorption_kg_per_year,
            )?,
        })
    }
}

/// All lookup tables the calculator needs, fixed once built.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RateTables {
    pub emission: EmissionRates,
    pub equivalence: EquivalenceRates,
}

#[cfg(test)]
#[path = "rates_tests.rs"]
mod tests;
