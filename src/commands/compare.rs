use crate::cli::{Cli, CompareArgs};
use crate::controller::Event;
use crate::equivalence::INVALID_INPUT_PROMPT;
use crate::output::{OutputFormat, Report};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::{
    build_controller, color_choice_to_mode, format_report, load_config, report_error, write_output,
};

#[must_use]
pub fn run_compare(args: &CompareArgs, cli: &Cli) -> i32 {
    match run_compare_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Print the comparison chart for every mode over one distance.
///
/// # Errors
/// Returns an error if configuration, rendering or output fails.
pub fn run_compare_impl(args: &CompareArgs, cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let mut controller = build_controller(&config)?;
    controller.handle(Event::DistanceInput(args.distance.clone()))?;

    let report = Report::from_controller(&controller);
    let output = if args.format == OutputFormat::Text && report.display.result.is_none() {
        format!("{INVALID_INPUT_PROMPT}\n")
    } else {
        format_report(args.format, &report, color_choice_to_mode(cli.color), false)?
    };
    write_output(args.output.as_deref(), &output, cli.quiet)
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
