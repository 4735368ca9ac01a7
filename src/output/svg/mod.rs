//! SVG chart primitives backing the in-memory chart surface.
//!
//! Charts use viewBox-based scaling so the markup renders at any size, and
//! carry a `<title>` element per chart and per bar for hover tooltips.

mod chart;
mod data;
mod element;
mod format;
mod style;

pub use chart::BarChart;
pub use data::BarDatum;
pub use element::{Bar, SvgElement, ValueAxis};
pub use format::{format_kg, html_escape};
pub use style::{ChartColor, TextAnchor};
