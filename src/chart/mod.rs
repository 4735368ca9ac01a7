//! Chart datasets, drawing surfaces and the slots that own live charts.
//!
//! A [`ChartSurface`] is the drawing target a chart is constructed on. Each
//! [`ChartSlot`] owns one surface and at most one live chart on it; replacing
//! or clearing the slot disposes the previous chart first, so a surface never
//! shows two overlaid charts.

mod renderer;
mod svg_surface;

pub use renderer::{ChartRenderer, DATASET_LABEL, comparison_chart_spec, single_chart_spec};
pub use svg_surface::{SvgChartHandle, SvgSurface};

use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartOptions {
    /// Value axis starts at zero instead of the smallest value.
    pub begin_at_zero: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            begin_at_zero: true,
        }
    }
}

/// Everything a charting backend needs to draw one chart.
///
/// `labels`, `values` and `colors` are parallel: one entry per bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub dataset_label: String,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
    pub options: ChartOptions,
}

impl ChartSpec {
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.values.len()
    }

    /// Labels, values and colors line up one-to-one.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.labels.len() == self.values.len() && self.colors.len() == self.values.len()
    }
}

/// A drawing target that charts are constructed on and disposed from.
pub trait ChartSurface {
    /// Reference to a chart drawn on this surface.
    type Handle;

    /// Construct a chart from `spec` on this surface.
    ///
    /// # Errors
    /// Returns an error if the backend cannot draw the chart.
    fn draw(&mut self, spec: &ChartSpec) -> Result<Self::Handle>;

    /// Release a chart previously returned by [`draw`](Self::draw).
    ///
    /// Handles that no longer refer to a live chart are ignored.
    fn dispose(&mut self, handle: Self::Handle);
}

/// One chart position: a surface plus the chart currently drawn on it.
pub struct ChartSlot<S: ChartSurface> {
    surface: S,
    live: Option<(S::Handle, ChartSpec)>,
}

impl<S: ChartSurface> ChartSlot<S> {
    #[must_use]
    pub const fn new(surface: S) -> Self {
        Self {
            surface,
            live: None,
        }
    }

    /// Dispose the current chart, if any, then draw `spec`.
    ///
    /// # Errors
    /// Returns the surface's error if drawing fails; the slot is left empty.
    pub fn replace(&mut self, spec: ChartSpec) -> Result<()> {
        self.clear();
        let handle = self.surface.draw(&spec)?;
        self.live = Some((handle, spec));
        Ok(())
    }

    /// Dispose the current chart without drawing a new one.
    pub fn clear(&mut self) {
        if let Some((handle, _)) = self.live.take() {
            self.surface.dispose(handle);
        }
    }

    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.live.is_some()
    }

    /// Spec of the chart currently drawn, if any.
    #[must_use]
    pub fn spec(&self) -> Option<&ChartSpec> {
        self.live.as_ref().map(|(_, spec)| spec)
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
