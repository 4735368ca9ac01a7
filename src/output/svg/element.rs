//! Chart elements: the kg value axis and the bars it scales.

use std::fmt::Write;

use super::format::{format_kg, html_escape};
use super::style::{ChartColor, TextAnchor};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Number of intervals between the value axis ticks.
const INTERVALS: u32 = 4;
const TICK_LENGTH: f64 = 5.0;

/// Vertical value axis running from 0 kg at the baseline up to `max_kg`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueAxis {
    pub x: f64,
    pub baseline_y: f64,
    pub height: f64,
    /// Value at the top of the axis; always positive and finite.
    pub max_kg: f64,
    pub font_size: f64,
}

impl ValueAxis {
    /// Axis scaled so that `max_kg` reaches the top. A non-positive or
    /// non-finite maximum falls back to 1 kg.
    #[must_use]
    pub fn new(x: f64, baseline_y: f64, height: f64, max_kg: f64) -> Self {
        let max_kg = if max_kg.is_finite() && max_kg > 0.0 {
            max_kg
        } else {
            1.0
        };
        Self {
            x,
            baseline_y,
            height,
            max_kg,
            font_size: 10.0,
        }
    }

    /// Vertical position of `kg`; negative values sit on the baseline.
    #[must_use]
    pub fn y_for(&self, kg: f64) -> f64 {
        let fraction = (kg.max(0.0) / self.max_kg).min(1.0);
        fraction.mul_add(-self.height, self.baseline_y)
    }

    /// `(y, kg)` for every tick, from the baseline upwards.
    pub fn ticks(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..=INTERVALS).map(move |i| {
            let kg = self.max_kg * f64::from(i) / f64::from(INTERVALS);
            (self.y_for(kg), kg)
        })
    }
}

impl SvgElement for ValueAxis {
    fn render(&self) -> String {
        let mut output = String::new();
        let color = ChartColor::css_var("text-muted").to_css();

        let _ = writeln!(
            output,
            r#"<line x1="{x}" y1="{}" x2="{x}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
            self.baseline_y,
            self.baseline_y - self.height,
            x = self.x
        );

        for (y, kg) in self.ticks() {
            let _ = writeln!(
                output,
                r#"<line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{color}" stroke-width="1"/>"#,
                self.x,
                self.x - TICK_LENGTH
            );
            let _ = writeln!(
                output,
                r#"<text x="{}" y="{}" text-anchor="{}" fill="{color}" font-size="{}">{}</text>"#,
                self.x - TICK_LENGTH - 4.0,
                y + self.font_size / 3.0,
                TextAnchor::End,
                self.font_size,
                format_kg(kg)
            );
        }

        output
    }
}

/// A single bar, with a hover tooltip giving its value in kg.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub label: String,
    pub value_kg: f64,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" rx="2">
    <title>{}: {} kg</title>
</rect>"#,
            self.x,
            self.y,
            self.width,
            self.height,
            self.color.to_css(),
            html_escape(&self.label),
            format_kg(self.value_kg)
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
