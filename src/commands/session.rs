use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::cli::{Cli, SessionArgs};
use crate::controller::Event;
use crate::output::{HtmlFormatter, OutputFormatter, Report, TextFormatter};
use crate::transport::TransportMode;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::{
    SvgController, build_controller, color_choice_to_mode, format_error, load_config, report_error,
};

const NOTHING_TO_SHOW: &str = "No calculation.";

/// One line of session input.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Event(Event),
    /// Print the legend and the comparison table.
    Show,
    Quit,
}

/// Parse a session line. Blank lines and `#` comments yield `None`.
///
/// # Errors
/// Returns a message naming the offending command or mode.
pub fn parse_session_line(line: &str) -> std::result::Result<Option<SessionCommand>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));

    let command = match word.to_lowercase().as_str() {
        "mode" => {
            let mode = rest.parse::<TransportMode>().map_err(|e| e.to_string())?;
            SessionCommand::Event(Event::ModeChanged(mode))
        }
        "distance" => SessionCommand::Event(Event::DistanceInput(rest.to_string())),
        "reset" => SessionCommand::Event(Event::Reset),
        "show" => SessionCommand::Show,
        "quit" | "exit" => SessionCommand::Quit,
        other => {
            return Err(format!(
                "Unknown session command: {other} (expected mode, distance, reset, show or quit)"
            ));
        }
    };
    Ok(Some(command))
}

#[must_use]
pub fn run_session(args: &SessionArgs, cli: &Cli) -> i32 {
    let result = load_config(cli).and_then(|config| {
        let mut controller = build_controller(&config)?;
        let formatter = TextFormatter::new(color_choice_to_mode(cli.color));
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_session_impl(
            &mut controller,
            stdin.lock(),
            &mut stdout.lock(),
            &formatter,
            args.snapshot.as_deref(),
        )
    });

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Feed events read from `input` into `controller` until EOF or `quit`.
///
/// Bad lines and chart errors are reported on `output` and the session
/// carries on.
///
/// # Errors
/// Returns an error if reading input, writing output or writing the
/// snapshot fails.
pub fn run_session_impl<R: BufRead, W: Write>(
    controller: &mut SvgController,
    input: R,
    output: &mut W,
    formatter: &TextFormatter,
    snapshot: Option<&Path>,
) -> Result<()> {
    for line in input.lines() {
        let command = match parse_session_line(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(output, "Error: {message}")?;
                continue;
            }
        };

        match command {
            SessionCommand::Quit => break,
            SessionCommand::Show => {
                let report = Report::from_controller(controller);
                write_text(output, &formatter.format(&report)?)?;
            }
            SessionCommand::Event(event) => {
                if let Err(e) = controller.handle(event) {
                    writeln!(output, "{}", format_error(&e))?;
                }
                let report = Report::from_controller(controller);
                let legend_only = formatter.with_comparison(false);
                write_text(output, &legend_only.format(&report)?)?;
                if let Some(path) = snapshot {
                    write_snapshot(path, &report)?;
                }
            }
        }
    }
    output.flush()?;
    Ok(())
}

fn write_text<W: Write>(output: &mut W, text: &str) -> Result<()> {
    if text.is_empty() {
        writeln!(output, "{NOTHING_TO_SHOW}")?;
    } else {
        write!(output, "{text}")?;
    }
    Ok(())
}

fn write_snapshot(path: &Path, report: &Report) -> Result<()> {
    let html = HtmlFormatter::new().format(report)?;
    fs::write(path, html)?;
    log::debug!("snapshot written to {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
