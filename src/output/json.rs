use serde::Serialize;

use crate::controller::{ControllerState, DisplayState};
use crate::equivalence::Legend;
use crate::error::Result;
use crate::severity::Severity;

use super::{OutputFormatter, Report};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    state: ControllerState,
    mode: &'a str,
    distance: &'a str,
    legend: &'a Legend,
    chart: Option<Vec<JsonBar<'a>>>,
    comparison: Option<Vec<JsonBar<'a>>>,
}

#[derive(Serialize)]
struct JsonBar<'a> {
    label: &'a str,
    emission_kg: f64,
    severity: Severity,
    color: &'a str,
}

fn bars(spec: &crate::chart::ChartSpec) -> Vec<JsonBar<'_>> {
    spec.labels
        .iter()
        .zip(&spec.values)
        .zip(&spec.colors)
        .map(|((label, &emission_kg), color)| JsonBar {
            label,
            emission_kg,
            severity: Severity::classify(emission_kg),
            color,
        })
        .collect()
}

fn convert(display: &DisplayState) -> JsonOutput<'_> {
    JsonOutput {
        state: display.state,
        mode: display.mode.id(),
        distance: &display.distance_text,
        legend: &display.legend,
        chart: display.single_chart.as_ref().map(bars),
        comparison: display.comparison_chart.as_ref().map(bars),
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        Ok(serde_json::to_string_pretty(&convert(&report.display))?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
