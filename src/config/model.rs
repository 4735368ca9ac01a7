use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Co2Error, Result};
use crate::rates::{
    DEFAULT_STREAMING_KG_PER_HOUR, DEFAULT_TREE_ABSORPTION_KG_PER_YEAR, EmissionRates,
    EquivalenceRates, RateTables,
};
use crate::transport::TransportMode;

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Emission rate overrides in kg CO₂ per km, keyed by mode identifier.
    /// Modes left out keep their default rate.
    #[serde(default)]
    pub rates: IndexMap<String, f64>,

    #[serde(default)]
    pub equivalence: EquivalenceConfig,

    #[serde(default)]
    pub chart: ChartConfig,
}

/// Equivalence constants [equivalence].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EquivalenceConfig {
    /// kg CO₂ per hour of video streaming.
    #[serde(default = "default_streaming")]
    pub streaming_kg_per_hour: f64,

    /// kg CO₂ one tree absorbs per year.
    #[serde(default = "default_tree_absorption")]
    pub tree_absorption_kg_per_year: f64,
}

impl Default for EquivalenceConfig {
    fn default() -> Self {
        Self {
            streaming_kg_per_hour: default_streaming(),
            tree_absorption_kg_per_year: default_tree_absorption(),
        }
    }
}

/// Chart drawing size [chart].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChartConfig {
    #[serde(default = "default_chart_width")]
    pub width: f64,

    #[serde(default = "default_chart_height")]
    pub height: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_chart_height(),
        }
    }
}

const fn default_streaming() -> f64 {
    DEFAULT_STREAMING_KG_PER_HOUR
}

const fn default_tree_absorption() -> f64 {
    DEFAULT_TREE_ABSORPTION_KG_PER_YEAR
}

const fn default_chart_width() -> f64 {
    400.0
}

const fn default_chart_height() -> f64 {
    240.0
}

/// Smallest chart side that still leaves room for axes and labels.
const MIN_CHART_SIDE: f64 = 100.0;

impl Config {
    /// Build the rate tables, applying overrides on top of the defaults.
    ///
    /// # Errors
    /// Returns [`Co2Error::UnknownMode`] for a rate keyed by an unknown mode,
    /// or [`Co2Error::Config`] for a non-positive rate or constant.
    pub fn rate_tables(&self) -> Result<RateTables> {
        let mut pairs: Vec<(TransportMode, f64)> = EmissionRates::default().iter().collect();
        for (id, &rate) in &self.rates {
            pairs.push((id.parse()?, rate));
        }

        Ok(RateTables {
            emission: EmissionRates::from_pairs(pairs)?,
            equivalence: EquivalenceRates::new(
                self.equivalence.streaming_kg_per_hour,
                self.equivalence.tree_absorption_kg_per_year,
            )?,
        })
    }

    /// Check everything that serde cannot express.
    ///
    /// # Errors
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<()> {
        self.rate_tables()?;
        for (name, side) in [("width", self.chart.width), ("height", self.chart.height)] {
            if !side.is_finite() || side < MIN_CHART_SIDE {
                return Err(Co2Error::Config(format!(
                    "chart.{name} must be at least {MIN_CHART_SIDE}, got {side}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
