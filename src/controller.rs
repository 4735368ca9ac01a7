//! Event-driven controller tying the form, legend and charts together.

use serde::Serialize;

use crate::calculator::{CalculationInput, CalculationResult, calculate, parse_distance};
use crate::chart::{ChartRenderer, ChartSpec, ChartSurface};
use crate::equivalence::Legend;
use crate::error::Result;
use crate::rates::RateTables;
use crate::transport::TransportMode;

/// A discrete input from the form.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ModeChanged(TransportMode),
    /// Raw text of the distance entry.
    DistanceInput(String),
    Reset,
}

/// Observable controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControllerState {
    /// Nothing to show: no distance yet, an unusable one, or after a reset.
    #[default]
    Empty,
    Displaying,
}

/// Snapshot of everything currently rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayState {
    pub state: ControllerState,
    pub mode: TransportMode,
    pub distance_text: String,
    pub legend: Legend,
    pub result: Option<CalculationResult>,
    pub single_chart: Option<ChartSpec>,
    pub comparison_chart: Option<ChartSpec>,
}

/// Recomputes and re-renders on every form event.
///
/// Display output depends only on the current form contents, never on
/// earlier events.
pub struct Controller<S: ChartSurface, C: ChartSurface = S> {
    tables: RateTables,
    mode: TransportMode,
    distance_text: String,
    legend: Legend,
    result: Option<CalculationResult>,
    charts: ChartRenderer<S, C>,
}

impl<S: ChartSurface, C: ChartSurface> Controller<S, C> {
    /// Controller in the empty state, drawing onto the given surfaces.
    #[must_use]
    pub fn new(tables: RateTables, single_surface: S, comparison_surface: C) -> Self {
        Self {
            tables,
            mode: TransportMode::default(),
            distance_text: String::new(),
            legend: Legend::Empty,
            result: None,
            charts: ChartRenderer::new(single_surface, comparison_surface),
        }
    }

    /// Apply one event.
    ///
    /// # Errors
    /// Returns a chart surface error if a redraw fails. The legend is
    /// already updated at that point and both charts are cleared.
    pub fn handle(&mut self, event: Event) -> Result<ControllerState> {
        match event {
            Event::ModeChanged(mode) => {
                self.mode = mode;
                self.recompute()?;
            }
            Event::DistanceInput(text) => {
                self.distance_text = text;
                self.recompute()?;
            }
            Event::Reset => self.reset(),
        }
        Ok(self.state())
    }

    /// Clear the distance entry, the legend and both charts.
    pub fn reset(&mut self) {
        log::debug!("reset");
        self.distance_text.clear();
        self.legend = Legend::Empty;
        self.result = None;
        self.charts.clear();
    }

    fn recompute(&mut self) -> Result<()> {
        let result = parse_distance(&self.distance_text)
            .and_then(|d| calculate(&self.tables.emission, CalculationInput::new(self.mode, d)));

        self.legend = Legend::from_calculation(result.as_ref(), &self.tables.equivalence);
        self.result = result;

        let Some(result) = result else {
            log::debug!(
                "distance {:?} is not usable, clearing charts",
                self.distance_text
            );
            self.charts.clear();
            return Ok(());
        };

        log::debug!(
            "{} over {} km emits {} kg",
            result.mode,
            result.distance_km,
            result.emission_kg
        );
        let rendered = self.charts.render_single(&result).and_then(|()| {
            self.charts
                .render_comparison(&self.tables.emission, result.distance_km)
        });
        if rendered.is_err() {
            // never leave a chart from an earlier distance on screen
            self.charts.clear();
        }
        rendered
    }

    #[must_use]
    pub const fn state(&self) -> ControllerState {
        if self.result.is_some() {
            ControllerState::Displaying
        } else {
            ControllerState::Empty
        }
    }

    #[must_use]
    pub const fn legend(&self) -> &Legend {
        &self.legend
    }

    #[must_use]
    pub const fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub const fn mode(&self) -> TransportMode {
        self.mode
    }

    #[must_use]
    pub fn distance_text(&self) -> &str {
        &self.distance_text
    }

    #[must_use]
    pub const fn tables(&self) -> &RateTables {
        &self.tables
    }

    #[must_use]
    pub const fn charts(&self) -> &ChartRenderer<S, C> {
        &self.charts
    }

    #[must_use]
    pub fn display_state(&self) -> DisplayState {
        DisplayState {
            state: self.state(),
            mode: self.mode,
            distance_text: self.distance_text.clone(),
            legend: self.legend.clone(),
            result: self.result,
            single_chart: self.charts.single().spec().cloned(),
            comparison_chart: self.charts.comparison().spec().cloned(),
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
