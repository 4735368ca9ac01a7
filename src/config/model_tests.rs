use super::*;

#[test]
fn default_config_yields_default_tables() {
    let tables = Config::default().rate_tables().unwrap();
    assert_eq!(tables, RateTables::default());
}

#[test]
fn empty_toml_is_default() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_rate_override() {
    let config: Config = toml::from_str(
        r"
[rates]
plane = 0.3
",
    )
    .unwrap();

    let tables = config.rate_tables().unwrap();
    assert!((tables.emission.rate(TransportMode::Plane) - 0.3).abs() < f64::EPSILON);
    assert!((tables.emission.rate(TransportMode::Car) - 0.12).abs() < f64::EPSILON);
}

#[test]
fn equivalence_override() {
    let config: Config = toml::from_str(
        r"
[equivalence]
tree_absorption_kg_per_year = 25.0
",
    )
    .unwrap();

    let tables = config.rate_tables().unwrap();
    assert!((tables.equivalence.tree_absorption_kg_per_year - 25.0).abs() < f64::EPSILON);
    assert!((tables.equivalence.streaming_kg_per_hour - 0.036).abs() < f64::EPSILON);
}

#[test]
fn unknown_mode_key_is_rejected() {
    let config: Config = toml::from_str(
        r"
[rates]
boat = 0.02
",
    )
    .unwrap();

    let err = config.rate_tables().unwrap_err();
    assert!(matches!(err, Co2Error::UnknownMode(ref m) if m == "boat"));
}

#[test]
fn non_positive_rate_is_rejected() {
    let config: Config = toml::from_str(
        r"
[rates]
car = -0.1
",
    )
    .unwrap();

    assert!(matches!(config.validate(), Err(Co2Error::Config(_))));
}

#[test]
fn tiny_chart_is_rejected() {
    let config: Config = toml::from_str(
        r"
[chart]
width = 10.0
",
    )
    .unwrap();

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("chart.width"));
}

#[test]
fn unknown_section_is_rejected() {
    let result: std::result::Result<Config, _> = toml::from_str(
        r"
[output]
format = 'json'
",
    );
    assert!(result.is_err());
}
