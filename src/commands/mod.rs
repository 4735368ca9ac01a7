mod calc;
mod compare;
mod init;
mod session;

pub use calc::{run_calc, run_calc_impl};
pub use compare::{run_compare, run_compare_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use session::{SessionCommand, parse_session_line, run_session, run_session_impl};

use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::chart::SvgSurface;
use crate::cli::{Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::controller::Controller;
use crate::error::{Co2Error, Result};
use crate::output::{
    ColorMode, HtmlFormatter, JsonFormatter, OutputFormat, OutputFormatter, Report, TextFormatter,
};

/// Controller drawing both charts as in-memory SVG.
pub type SvgController = Controller<SvgSurface>;

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load the effective configuration for this invocation.
///
/// # Errors
/// Returns an error if a config file exists but is unreadable or invalid.
pub fn load_config(cli: &Cli) -> Result<Config> {
    if cli.no_config {
        log::info!("--no-config given, using built-in rates");
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let result = cli
        .config
        .as_deref()
        .map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    Ok(result.config)
}

/// Controller in the empty state, sized and rated from `config`.
///
/// # Errors
/// Returns an error if the configured rates are invalid.
pub fn build_controller(config: &Config) -> Result<SvgController> {
    config.validate()?;
    let tables = config.rate_tables()?;
    let (width, height) = (config.chart.width, config.chart.height);
    Ok(Controller::new(
        tables,
        SvgSurface::new(width, height),
        SvgSurface::new(width, height),
    ))
}

/// Render `report` in the requested format.
///
/// `show_legend` only affects text output; JSON and HTML always carry the
/// full display.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_report(
    format: OutputFormat,
    report: &Report,
    color_mode: ColorMode,
    show_legend: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode)
            .with_legend(show_legend)
            .format(report),
        OutputFormat::Json => JsonFormatter.format(report),
        OutputFormat::Html => HtmlFormatter::new().format(report),
    }
}

/// Error message followed by a recovery hint when one applies.
#[must_use]
pub fn format_error(error: &Co2Error) -> String {
    let mut message = format!("Error: {error}");
    if let Some(hint) = error.suggestion() {
        let _ = write!(message, "\n  help: {hint}");
    }
    message
}

pub fn report_error(error: &Co2Error) {
    eprintln!("{}", format_error(error));
}

/// Write to `output_path`, or to stdout unless `quiet`.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
        log::info!("wrote {}", path.display());
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
