use tempfile::TempDir;

use super::*;
use crate::cli::Commands;
use crate::commands::tests::parse_cli;

fn calc_to_file(extra: &[&str]) -> String {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out");
    let path_str = path.to_str().unwrap();

    let mut args = vec!["--no-config", "--color", "never", "calc", "-o", path_str];
    args.extend_from_slice(extra);
    let cli = parse_cli(&args);
    let Commands::Calc(calc_args) = &cli.command else {
        panic!("expected calc");
    };

    run_calc_impl(calc_args, &cli).unwrap();
    std::fs::read_to_string(&path).unwrap()
}

#[test]
fn calc_car_text() {
    let output = calc_to_file(&["-m", "car", "-d", "100"]);
    assert!(output.contains("Environmental impact of Car"));
    assert!(output.contains("12.00 kg"));
    assert!(output.contains("Transport comparison (100 km)"));
}

#[test]
fn calc_invalid_distance_prints_prompt() {
    let output = calc_to_file(&["-d", "-5"]);
    assert_eq!(output.trim(), "Please enter a valid distance.");
}

#[test]
fn calc_json_reports_state() {
    let output = calc_to_file(&["-m", "plane", "-d", "40", "-f", "json"]);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["state"], "displaying");
    assert_eq!(value["mode"], "plane");
}

#[test]
fn calc_html_embeds_charts() {
    let output = calc_to_file(&["-d", "100", "-f", "html"]);
    assert!(output.contains("<!DOCTYPE html>"));
    assert!(output.contains("<svg"));
}

#[test]
fn run_calc_reports_config_error() {
    let cli = parse_cli(&["-c", "/nonexistent/co2.toml", "calc", "-d", "100"]);
    let Commands::Calc(calc_args) = &cli.command else {
        panic!("expected calc");
    };
    assert_eq!(run_calc(calc_args, &cli), EXIT_CONFIG_ERROR);
}
