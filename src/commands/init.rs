use std::fs;

use crate::{Co2Error, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::report_error;

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a commented default configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(Co2Error::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r"# co2-calc configuration file

# Emission rates in kg CO2 per km. Modes left out keep these defaults.
[rates]
car = 0.12
plane = 0.25
train = 0.04
bus = 0.06

[equivalence]
# kg CO2 emitted per hour of video streaming
streaming_kg_per_hour = 0.036
# kg CO2 one tree absorbs in a year
tree_absorption_kg_per_year = 22.0

# Size of the rendered SVG charts
[chart]
width = 400.0
height = 240.0
"
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
