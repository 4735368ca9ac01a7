//! In-memory SVG drawing surface.

use crate::error::{Co2Error, Result};
use crate::output::svg::{BarChart, BarDatum, ChartColor, SvgElement};

use super::{ChartSpec, ChartSurface};

/// Reference to a chart drawn on an [`SvgSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgChartHandle {
    generation: u64,
}

/// Renders charts to SVG markup held in memory.
///
/// Every draw bumps the generation; disposing a handle from an older
/// generation leaves the current markup untouched.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    generation: u64,
    live: Option<u64>,
    markup: Option<String>,
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new(400.0, 240.0)
    }
}

impl SvgSurface {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            generation: 0,
            live: None,
            markup: None,
        }
    }

    /// Markup of the live chart, or `None` when nothing is drawn.
    #[must_use]
    pub fn markup(&self) -> Option<&str> {
        self.markup.as_deref()
    }

    /// Number of charts drawn on this surface so far.
    #[must_use]
    pub const fn draw_count(&self) -> u64 {
        self.generation
    }
}

impl ChartSurface for SvgSurface {
    type Handle = SvgChartHandle;

    fn draw(&mut self, spec: &ChartSpec) -> Result<SvgChartHandle> {
        if !spec.is_consistent() {
            return Err(Co2Error::Chart(format!(
                "chart '{}' has {} labels, {} values and {} colors",
                spec.title,
                spec.labels.len(),
                spec.values.len(),
                spec.colors.len()
            )));
        }

        let data = spec
            .labels
            .iter()
            .zip(&spec.values)
            .zip(&spec.colors)
            .map(|((label, &value), color)| {
                BarDatum::new(label.as_str(), value, ChartColor::hex(color))
            })
            .collect();

        let chart = BarChart::new(spec.title.as_str(), data)
            .with_series_label(spec.dataset_label.as_str())
            .with_size(self.width, self.height);

        self.generation += 1;
        self.live = Some(self.generation);
        self.markup = Some(chart.render());
        log::trace!("drew '{}' as generation {}", spec.title, self.generation);

        Ok(SvgChartHandle {
            generation: self.generation,
        })
    }

    fn dispose(&mut self, handle: SvgChartHandle) {
        if self.live == Some(handle.generation) {
            self.live = None;
            self.markup = None;
        }
    }
}
