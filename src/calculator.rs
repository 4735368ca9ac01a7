//! Emission calculation.

use serde::Serialize;

use crate::rates::EmissionRates;
use crate::transport::TransportMode;

/// A mode and the distance travelled with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationInput {
    pub mode: TransportMode,
    pub distance_km: f64,
}

/// Emission estimated for one trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    pub mode: TransportMode,
    pub distance_km: f64,
    /// Unrounded `rate(mode) * distance_km`.
    pub emission_kg: f64,
}

impl CalculationInput {
    #[must_use]
    pub const fn new(mode: TransportMode, distance_km: f64) -> Self {
        Self { mode, distance_km }
    }

    /// A distance is usable only when it is finite and strictly positive.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.distance_km.is_finite() && self.distance_km > 0.0
    }
}

/// Estimate the emission of `input`.
///
/// `None` if the distance is unusable or the product overflows `f64`.
#[must_use]
pub fn calculate(rates: &EmissionRates, input: CalculationInput) -> Option<CalculationResult> {
    if !input.is_valid() {
        return None;
    }

    let emission_kg = rates.rate(input.mode) * input.distance_km;
    if !emission_kg.is_finite() {
        return None;
    }

    Some(CalculationResult {
        mode: input.mode,
        distance_km: input.distance_km,
        emission_kg,
    })
}

/// Parse the text of a distance entry.
///
/// Surrounding whitespace is ignored. Empty or non-numeric text yields `None`;
/// range checks are left to [`calculate`].
#[must_use]
pub fn parse_distance(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
#[path = "calculator_tests.rs"]
mod tests;
