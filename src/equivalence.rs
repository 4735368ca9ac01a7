//! Relatable equivalences for an emission and the legend built from them.

use serde::Serialize;

use crate::calculator::CalculationResult;
use crate::rates::EquivalenceRates;
use crate::transport::display_name_for;

/// Prompt shown in place of a summary when the distance is unusable.
pub const INVALID_INPUT_PROMPT: &str = "Please enter a valid distance.";

/// Round `value` to `decimals` decimal places, halves away from zero.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Human-readable breakdown of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionSummary {
    pub transport_name: String,
    pub distance_km: f64,
    pub emission_kg: f64,
    /// Hours of video streaming with the same footprint, 1 decimal.
    pub streaming_hours: f64,
    /// Years one tree needs to absorb the emission, 2 decimals.
    pub tree_years: f64,
    /// Same distance covered by bike, emission free.
    pub bike_distance_km: f64,
}

impl EmissionSummary {
    #[must_use]
    pub fn from_result(result: &CalculationResult, rates: &EquivalenceRates) -> Self {
        Self {
            transport_name: display_name_for(result.mode.id()).into_owned(),
            distance_km: result.distance_km,
            emission_kg: result.emission_kg,
            streaming_hours: round_to(result.emission_kg / rates.streaming_kg_per_hour, 1),
            tree_years: round_to(result.emission_kg / rates.tree_absorption_kg_per_year, 2),
            bike_distance_km: result.distance_km,
        }
    }
}

/// What the legend area currently shows.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Legend {
    /// Nothing entered yet, or the form was reset.
    #[default]
    Empty,
    /// The last entry was not a usable distance.
    InvalidInput,
    Summary(EmissionSummary),
}

impl Legend {
    /// Legend for the outcome of a calculation; no result means the prompt.
    #[must_use]
    pub fn from_calculation(result: Option<&CalculationResult>, rates: &EquivalenceRates) -> Self {
        result.map_or(Self::InvalidInput, |r| {
            Self::Summary(EmissionSummary::from_result(r, rates))
        })
    }

    #[must_use]
    pub const fn summary(&self) -> Option<&EmissionSummary> {
        match self {
            Self::Summary(summary) => Some(summary),
            Self::Empty | Self::InvalidInput => None,
        }
    }
}

#[cfg(test)]
#[path = "equivalence_tests.rs"]
mod tests;
