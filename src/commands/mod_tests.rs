use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::Co2Error;
use crate::controller::{ControllerState, Event};
use crate::rates::RateTables;

pub(super) fn parse_cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("co2-calc").chain(args.iter().copied())).unwrap()
}

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(color_choice_to_mode(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(color_choice_to_mode(ColorChoice::Always), ColorMode::Always);
    assert_eq!(color_choice_to_mode(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn load_config_no_config_uses_defaults() {
    let cli = parse_cli(&["--no-config", "compare", "-d", "10"]);
    assert_eq!(load_config(&cli).unwrap(), Config::default());
}

#[test]
fn load_config_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.toml");
    std::fs::write(&path, "[rates]\ncar = 0.2\n").unwrap();

    let cli = parse_cli(&["-c", path.to_str().unwrap(), "compare", "-d", "10"]);
    let config = load_config(&cli).unwrap();
    assert_eq!(config.rates.get("car"), Some(&0.2));
}

#[test]
fn load_config_missing_explicit_path_fails() {
    let cli = parse_cli(&["-c", "/nonexistent/co2.toml", "compare", "-d", "10"]);
    let err = load_config(&cli).unwrap_err();
    assert!(matches!(err, Co2Error::FileRead { .. }));
}

#[test]
fn build_controller_starts_empty() {
    let controller = build_controller(&Config::default()).unwrap();
    assert_eq!(controller.state(), ControllerState::Empty);
    assert_eq!(*controller.tables(), RateTables::default());
}

#[test]
fn build_controller_applies_chart_size() {
    let mut config = Config::default();
    config.chart.width = 600.0;
    let mut controller = build_controller(&config).unwrap();
    controller
        .handle(Event::DistanceInput("10".to_string()))
        .unwrap();

    let markup = controller.charts().single().surface().markup().unwrap();
    assert!(markup.contains("viewBox=\"0 0 600 240\""));
}

#[test]
fn build_controller_rejects_bad_rate() {
    let mut config = Config::default();
    config.rates.insert("bus".to_string(), -1.0);
    assert!(build_controller(&config).is_err());
}

#[test]
fn format_report_json_ignores_legend_flag() {
    let mut controller = build_controller(&Config::default()).unwrap();
    controller
        .handle(Event::DistanceInput("100".to_string()))
        .unwrap();
    let report = Report::from_controller(&controller);

    let json = format_report(OutputFormat::Json, &report, ColorMode::Never, false).unwrap();
    assert!(json.contains("\"legend\""));

    let text = format_report(OutputFormat::Text, &report, ColorMode::Never, false).unwrap();
    assert!(!text.contains("Environmental impact"));
}

#[test]
fn write_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path: PathBuf = temp_dir.path().join("out.txt");

    write_output(Some(&path), "hello\n", true).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
}

#[test]
fn format_error_adds_hint() {
    let message = format_error(&Co2Error::UnknownMode("rocket".to_string()));
    assert_eq!(
        message,
        "Error: Unknown transport mode: rocket\n  help: Valid transport modes are: car, plane, train, bus"
    );
}

#[test]
fn format_error_without_hint_is_one_line() {
    let message = format_error(&Co2Error::Chart("surface lost".to_string()));
    assert_eq!(message, "Error: Chart rendering error: surface lost");
}
