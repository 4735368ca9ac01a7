//! One bar's worth of chart input.

use super::style::ChartColor;

/// Emission shown as one bar: category label, kg value and fill.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value_kg: f64,
    pub color: ChartColor,
}

impl BarDatum {
    #[must_use]
    pub fn new(label: impl Into<String>, value_kg: f64, color: ChartColor) -> Self {
        Self {
            label: label.into(),
            value_kg,
            color,
        }
    }
}
