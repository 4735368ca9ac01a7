pub mod calculator;
pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod equivalence;
pub mod error;
pub mod output;
pub mod rates;
pub mod severity;
pub mod transport;

pub use calculator::{CalculationInput, CalculationResult, calculate, parse_distance};
pub use chart::{ChartRenderer, ChartSlot, ChartSpec, ChartSurface, SvgSurface};
pub use config::Config;
pub use controller::{Controller, ControllerState, DisplayState, Event};
pub use equivalence::{EmissionSummary, Legend};
pub use error::{Co2Error, Result};
pub use rates::{EmissionRates, EquivalenceRates, RateTables};
pub use severity::Severity;
pub use transport::TransportMode;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
