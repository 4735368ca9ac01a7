use std::fmt::Write;

use crate::equivalence::{INVALID_INPUT_PROMPT, Legend};
use crate::error::Result;

use super::svg::{format_kg, html_escape};
use super::{OutputFormatter, Report};

const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>CO₂ Emission Calculator</title>
    <style>
        :root {
            --color-low: #4CAF50;
            --color-moderate: #FFC107;
            --color-high: #F44336;
            --color-bg: #f8fafc;
            --color-card: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #1e293b;
            --color-text-muted: #64748b;
            --color-chart-primary: #6366f1;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 960px; margin: 0 auto; }
        h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; }
        .legend { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); margin-bottom: 1.5rem; }
        .legend h4 { font-size: 1.125rem; margin-bottom: 0.5rem; }
        .legend h5 { font-size: 1rem; margin: 0.75rem 0 0.25rem; }
        .legend ul { list-style: none; }
        .charts-section { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 1rem; }
        .chart-container { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); }
        .chart-container h3 { font-size: 1rem; font-weight: 600; margin-bottom: 1rem; }
        .chart-container svg { width: 100%; height: auto; }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
    </style>
</head>
<body>
    <div class="container">
        <h1>CO₂ Emission Calculator</h1>
"#;

const HTML_FOOTER: &str = r#"        <div class="footer">
            Generated by <strong>co2-calc</strong>
        </div>
    </div>
</body>
</html>
"#;

/// Inner markup of the legend block.
///
/// Empty for [`Legend::Empty`], a single prompt paragraph for invalid input.
#[must_use]
pub fn legend_markup(legend: &Legend) -> String {
    let summary = match legend {
        Legend::Empty => return String::new(),
        Legend::InvalidInput => return format!("<p>{}</p>", html_escape(INVALID_INPUT_PROMPT)),
        Legend::Summary(summary) => summary,
    };

    let name = html_escape(&summary.transport_name);
    let mut output = String::new();
    let _ = writeln!(output, "<h4>Environmental impact of {name}</h4>");
    let _ = writeln!(output, "<p>Distance: {} km</p>", summary.distance_km);
    let _ = writeln!(
        output,
        "<p>Estimated CO₂ emissions: {} kg</p>",
        format_kg(summary.emission_kg)
    );
    output.push_str("<h5>Equivalences</h5>\n<ul>\n");
    let _ = writeln!(
        output,
        "    <li>📺 That equals {:.1} hours of video streaming.</li>",
        summary.streaming_hours
    );
    let _ = writeln!(
        output,
        "    <li>🌳 One tree would need {:.2} years to absorb this CO₂.</li>",
        summary.tree_years
    );
    let _ = writeln!(
        output,
        "    <li>🚴 Distance by bike: {} km.</li>",
        summary.bike_distance_km
    );
    output.push_str("</ul>");
    output
}

/// Standalone HTML page with the legend and both charts.
#[derive(Debug, Default)]
pub struct HtmlFormatter;

impl HtmlFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_legend(output: &mut String, legend: &Legend) {
        output.push_str("        <div class=\"legend\" id=\"emission-legend\">\n");
        for line in legend_markup(legend).lines() {
            let _ = writeln!(output, "            {line}");
        }
        output.push_str("        </div>\n");
    }

    fn write_chart(output: &mut String, heading: &str, svg: Option<&str>) {
        let Some(svg) = svg else {
            return;
        };
        output.push_str("            <div class=\"chart-container\">\n");
        let _ = writeln!(output, "                <h3>{}</h3>", html_escape(heading));
        for line in svg.lines() {
            let _ = writeln!(output, "                {line}");
        }
        output.push_str("            </div>\n");
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::from(HTML_HEADER);

        Self::write_legend(&mut output, &report.display.legend);

        if report.single_svg.is_some() || report.comparison_svg.is_some() {
            output.push_str("        <div class=\"charts-section\">\n");
            Self::write_chart(&mut output, "Selected transport", report.single_svg.as_deref());
            Self::write_chart(
                &mut output,
                "Transport comparison",
                report.comparison_svg.as_deref(),
            );
            output.push_str("        </div>\n");
        }

        output.push_str(HTML_FOOTER);
        Ok(output)
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
