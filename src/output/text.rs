use std::fmt::Write;

use crate::chart::ChartSpec;
use crate::equivalence::{EmissionSummary, INVALID_INPUT_PROMPT, Legend};
use crate::error::Result;
use crate::severity::Severity;

use super::svg::format_kg;
use super::{OutputFormatter, Report};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Plain-text rendering of the legend and the comparison chart.
#[derive(Debug, Clone, Copy)]
pub struct TextFormatter {
    use_colors: bool,
    show_legend: bool,
    show_comparison: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            show_legend: true,
            show_comparison: true,
        }
    }

    #[must_use]
    pub const fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    #[must_use]
    pub const fn with_comparison(mut self, show: bool) -> Self {
        self.show_comparison = show;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Low => ansi::GREEN,
            Severity::Moderate => ansi::YELLOW,
            Severity::High => ansi::RED,
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn write_summary(&self, output: &mut String, summary: &EmissionSummary) {
        let heading = format!("Environmental impact of {}", summary.transport_name);
        let emission = format!("{} kg", format_kg(summary.emission_kg));
        let emission = self.paint(
            &emission,
            Self::severity_color(Severity::classify(summary.emission_kg)),
        );

        let _ = writeln!(output, "{}", self.paint(&heading, ansi::BOLD));
        let _ = writeln!(output, "Distance: {} km", summary.distance_km);
        let _ = writeln!(output, "Estimated CO₂ emissions: {emission}");
        let _ = writeln!(output);
        let _ = writeln!(output, "Equivalences");
        let _ = writeln!(
            output,
            "  - {:.1} hours of video streaming",
            summary.streaming_hours
        );
        let _ = writeln!(
            output,
            "  - {:.2} years of CO₂ absorption by one tree",
            summary.tree_years
        );
        let _ = writeln!(
            output,
            "  - {} km by bike, emission free",
            summary.bike_distance_km
        );
    }

    fn write_legend(&self, output: &mut String, legend: &Legend) {
        match legend {
            Legend::Empty => {}
            Legend::InvalidInput => {
                let _ = writeln!(output, "{INVALID_INPUT_PROMPT}");
            }
            Legend::Summary(summary) => self.write_summary(output, summary),
        }
    }

    fn write_chart_table(&self, output: &mut String, spec: &ChartSpec, distance_km: f64) {
        let _ = writeln!(output, "{} ({distance_km} km)", spec.title);

        let width = spec.labels.iter().map(String::len).max().unwrap_or(0);
        for (label, &value) in spec.labels.iter().zip(&spec.values) {
            let severity = Severity::classify(value);
            let band = self.paint(&severity.to_string(), Self::severity_color(severity));
            let _ = writeln!(
                output,
                "  {label:<width$}  {:>10} kg  {band}",
                format_kg(value)
            );
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();
        let display = &report.display;

        if self.show_legend {
            self.write_legend(&mut output, &display.legend);
        }

        if self.show_comparison
            && let (Some(spec), Some(result)) = (&display.comparison_chart, &display.result)
        {
            if !output.is_empty() {
                output.push('\n');
            }
            self.write_chart_table(&mut output, spec, result.distance_km);
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
