//! The single-mode and comparison render paths.

use crate::calculator::CalculationResult;
use crate::error::Result;
use crate::rates::EmissionRates;
use crate::severity::Severity;
use crate::transport::display_name_for;

use super::{ChartKind, ChartOptions, ChartSlot, ChartSpec, ChartSurface};

/// Label of the single dataset every chart plots.
pub const DATASET_LABEL: &str = "CO₂ emissions (kg)";

const SINGLE_TITLE: &str = "Selected transport";
const COMPARISON_TITLE: &str = "Transport comparison";

fn bar_spec(title: &str, bars: impl IntoIterator<Item = (String, f64)>) -> ChartSpec {
    let (labels, values): (Vec<_>, Vec<_>) = bars.into_iter().unzip();
    let colors = values
        .iter()
        .map(|&value| Severity::classify(value).color().to_string())
        .collect();

    ChartSpec {
        kind: ChartKind::Bar,
        title: title.to_string(),
        labels,
        dataset_label: DATASET_LABEL.to_string(),
        values,
        colors,
        options: ChartOptions::default(),
    }
}

/// One bar for the selected mode, colored by its severity band.
#[must_use]
pub fn single_chart_spec(result: &CalculationResult) -> ChartSpec {
    let label = display_name_for(result.mode.id()).into_owned();
    bar_spec(SINGLE_TITLE, [(label, result.emission_kg)])
}

/// One bar per known mode, in enumeration order, for the same distance.
#[must_use]
pub fn comparison_chart_spec(rates: &EmissionRates, distance_km: f64) -> ChartSpec {
    bar_spec(
        COMPARISON_TITLE,
        rates.iter().map(|(mode, rate)| {
            (
                display_name_for(mode.id()).into_owned(),
                rate * distance_km,
            )
        }),
    )
}

/// Owns the single-mode and comparison chart slots.
pub struct ChartRenderer<S: ChartSurface, C: ChartSurface = S> {
    single: ChartSlot<S>,
    comparison: ChartSlot<C>,
}

impl<S: ChartSurface, C: ChartSurface> ChartRenderer<S, C> {
    /// Renderer drawing onto the given surfaces.
    #[must_use]
    pub const fn new(single_surface: S, comparison_surface: C) -> Self {
        Self {
            single: ChartSlot::new(single_surface),
            comparison: ChartSlot::new(comparison_surface),
        }
    }

    /// Redraw the single-mode chart for `result`.
    ///
    /// # Errors
    /// Returns the surface's error if drawing fails.
    pub fn render_single(&mut self, result: &CalculationResult) -> Result<()> {
        self.single.replace(single_chart_spec(result))
    }

    /// Redraw the comparison chart for every mode at `distance_km`.
    ///
    /// # Errors
    /// Returns the surface's error if drawing fails.
    pub fn render_comparison(&mut self, rates: &EmissionRates, distance_km: f64) -> Result<()> {
        self.comparison
            .replace(comparison_chart_spec(rates, distance_km))
    }

    /// Dispose both charts.
    pub fn clear(&mut self) {
        self.single.clear();
        self.comparison.clear();
    }

    #[must_use]
    pub const fn single(&self) -> &ChartSlot<S> {
        &self.single
    }

    #[must_use]
    pub const fn comparison(&self) -> &ChartSlot<C> {
        &self.comparison
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
