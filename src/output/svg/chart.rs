//! Vertical bar chart with a zero-based value axis.

use std::fmt::Write;

use super::data::BarDatum;
use super::element::{Bar, SvgElement, ValueAxis};
use super::format::{format_kg, html_escape};
use super::style::ChartColor;

/// Vertical bar chart with automatic scaling.
///
/// The value axis always starts at zero, so bar heights are proportional
/// to their values.
#[derive(Debug)]
pub struct BarChart {
    pub title: String,
    /// Caption naming the plotted series, drawn above the bars.
    pub series_label: String,
    pub data: Vec<BarDatum>,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            title: String::new(),
            series_label: String::new(),
            data: Vec::new(),
            width: 400.0,
            height: 240.0,
            padding: 40.0,
        }
    }
}

impl BarChart {
    #[must_use]
    pub fn new(title: impl Into<String>, data: Vec<BarDatum>) -> Self {
        Self {
            title: title.into(),
            data,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_series_label(mut self, label: impl Into<String>) -> Self {
        self.series_label = label.into();
        self
    }

    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Zero-based axis topped at the largest value.
    fn value_axis(&self, chart_height: f64) -> ValueAxis {
        let max_kg = self.data.iter().map(|d| d.value_kg).fold(0.0_f64, f64::max);
        ValueAxis::new(self.padding, self.padding + chart_height, chart_height, max_kg)
    }
}

impl SvgElement for BarChart {
    #[allow(clippy::cast_precision_loss)] // Acceptable for chart rendering
    fn render(&self) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            r#"<svg viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg" role="img">"#,
            self.width, self.height
        );

        let escaped_title = html_escape(&self.title);
        let _ = writeln!(output, r"    <title>{escaped_title}</title>");

        if self.data.is_empty() {
            let text_color = ChartColor::css_var("text-muted").to_css();
            let _ = writeln!(
                output,
                r#"    <text x="{}" y="{}" text-anchor="middle" fill="{text_color}" font-size="14">No data available</text>"#,
                self.width / 2.0,
                self.height / 2.0
            );
            output.push_str("</svg>");
            return output;
        }

        if !self.series_label.is_empty() {
            let text_color = ChartColor::css_var("text").to_css();
            let escaped = html_escape(&self.series_label);
            let _ = writeln!(
                output,
                r#"    <text x="{}" y="{}" text-anchor="middle" fill="{text_color}" font-size="12">{escaped}</text>"#,
                self.width / 2.0,
                self.padding / 2.0
            );
        }

        let chart_width = self.padding.mul_add(-2.0, self.width);
        let chart_height = self.padding.mul_add(-2.0, self.height);
        let axis = self.value_axis(chart_height);
        let baseline = axis.baseline_y;

        for line in axis.render().lines() {
            let _ = writeln!(output, "    {line}");
        }

        let bar_count = self.data.len();
        let gap_ratio = 0.2;
        let total_gap = chart_width * gap_ratio;
        let bar_width = (chart_width - total_gap) / bar_count as f64;
        let gap = total_gap / (bar_count + 1) as f64;
        let base_offset = self.padding + gap;

        for (i, point) in self.data.iter().enumerate() {
            let x = (bar_width + gap).mul_add(i as f64, base_offset);
            let y = axis.y_for(point.value_kg);

            let bar_element = Bar {
                x,
                y,
                width: bar_width,
                height: baseline - y,
                color: point.color.clone(),
                label: point.label.clone(),
                value_kg: point.value_kg,
            };

            for line in bar_element.render().lines() {
                let _ = writeln!(output, "    {line}");
            }

            let text_color = ChartColor::css_var("text").to_css();
            let _ = writeln!(
                output,
                r#"    <text x="{}" y="{}" text-anchor="middle" fill="{text_color}" font-size="10">{}</text>"#,
                x + bar_width / 2.0,
                y - 4.0,
                format_kg(point.value_kg)
            );

            let label_color = ChartColor::css_var("text-muted").to_css();
            let escaped_label = html_escape(&point.label);
            let _ = writeln!(
                output,
                r#"    <text x="{}" y="{}" text-anchor="middle" fill="{label_color}" font-size="10">{escaped_label}</text>"#,
                x + bar_width / 2.0,
                self.height - 8.0
            );
        }

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
