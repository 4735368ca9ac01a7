use crate::cli::{CalcArgs, Cli};
use crate::controller::Event;
use crate::output::Report;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::{
    build_controller, color_choice_to_mode, format_report, load_config, report_error, write_output,
};

#[must_use]
pub fn run_calc(args: &CalcArgs, cli: &Cli) -> i32 {
    match run_calc_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Feed the mode and distance through a fresh controller and print the result.
///
/// An unusable distance is not an error: the prompt is printed instead.
///
/// # Errors
/// Returns an error if configuration, rendering or output fails.
pub fn run_calc_impl(args: &CalcArgs, cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let mut controller = build_controller(&config)?;

    controller.handle(Event::ModeChanged(args.mode))?;
    controller.handle(Event::DistanceInput(args.distance.clone()))?;

    let report = Report::from_controller(&controller);
    let output = format_report(args.format, &report, color_choice_to_mode(cli.color), true)?;
    write_output(args.output.as_deref(), &output, cli.quiet)
}

#[cfg(test)]
#[path = "calc_tests.rs"]
mod tests;
